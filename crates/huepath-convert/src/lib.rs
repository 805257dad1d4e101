//! # huepath-convert
//!
//! Conversion path resolution, chromatic adaptation and fused transforms.
//!
//! # Architecture
//!
//! ```text
//! ConversionPathRegistry ──┐
//!                          ├─> resolve ─> compile ─> fuse ─> Program
//! AdaptationRegistry ──────┘      │                             │
//!                            DeviceProfile                ColorConverter
//! ```
//!
//! - [`ConversionStep`] / [`ConversionPath`] - unbound recipes, one exact
//!   `(from, to)` edge per path
//! - [`ConversionPathRegistry`] / [`AdaptationRegistry`] - catalogs, with
//!   process-wide instances behind [`paths`] and [`adaptations`]
//! - [`ColorConverter`] - resolves the stages between two colors (plain or
//!   profile-anchored), binds every step to its colorspace, fuses the
//!   result and runs it without allocating
//! - [`ops`] - the per-value formulas the compiled kernels call
//!
//! # Example
//!
//! ```rust
//! use huepath_convert::{ColorConverter, ConverterOptions};
//! use huepath_core::{Color, ColorType, Colorspace, Whitepoint};
//!
//! huepath_convert::init();
//!
//! let d65 = Color::xyz(0.95047, 1.0, 1.08883, Whitepoint::D65);
//! let target = Color::zeroed(ColorType::Xyz, Colorspace::Cie(Whitepoint::D50))?;
//! let options = ConverterOptions::with_adaptation("VonKries");
//!
//! let mut converter = ColorConverter::with_options(d65, target, &options)?;
//! let d50 = converter.convert()?.values();
//! assert!((d50[2] - 0.82521).abs() < 1e-4);
//! # Ok::<(), huepath_convert::ConvertError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod compiler;
mod converter;
mod error;
pub mod ops;
mod path;
mod registry;

pub use converter::{ColorConverter, ConverterOptions};
pub use error::{ConvertError, ConvertResult};
pub use path::{ConversionPath, ConversionStep, from_xyz_steps, to_xyz_steps};
pub use registry::{
    AdaptationRegistry, ConversionPathRegistry, add_chromatic_adaptation, add_conversion_path,
    adaptations, init, paths, remove_chromatic_adaptation, remove_conversion_path,
};
