//! # huepath-core
//!
//! Color model shared by the huepath crates.
//!
//! # Overview
//!
//! - [`Whitepoint`] - reference whites and the standard illuminants
//! - [`ColorType`] - identifiers of numeric color representations
//! - [`RgbSpace`] - RGB primaries, white and transfer curve, with presets
//! - [`Colorspace`] - what a color's numbers are relative to
//! - [`DeviceProfile`] - contract for profile-mediated colorspaces
//! - [`Color`] - a validated color value
//!
//! # Example
//!
//! ```rust
//! use huepath_core::{Color, ColorType, Colorspace, RgbSpace};
//! use std::sync::Arc;
//!
//! let srgb = Arc::new(RgbSpace::srgb());
//! let red = Color::rgb(1.0, 0.0, 0.0, srgb.clone());
//! assert_eq!(red.kind(), ColorType::Rgb);
//! assert_eq!(red.space(), &Colorspace::Rgb(srgb));
//! ```

#![warn(missing_docs)]

mod color;
mod color_type;
mod colorspace;
mod error;
mod profile;
mod rgb_space;
mod transfer;
mod whitepoint;

pub use color::{Color, MAX_CHANNELS};
pub use color_type::{ColorType, Din99Params, Din99Variant, Family, Shape};
pub use colorspace::{Colorspace, GraySpace};
pub use error::{CoreError, CoreResult};
pub use profile::{DeviceProfile, ProfileClass};
pub use rgb_space::{Preset, Primaries, RgbSpace, rgb_to_xyz_matrix};
pub use transfer::{CIE_EPSILON, CIE_KAPPA, TransferCurve};
pub use whitepoint::Whitepoint;

/// Re-export of the math crate.
pub use huepath_math as math;
