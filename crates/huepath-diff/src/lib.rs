//! # huepath-diff
//!
//! Perceptual color difference formulas.
//!
//! | Calculator | Inputs | Notes |
//! |------------|--------|-------|
//! | [`Cie76`] | Lab, LCHab, Luv, LCHuv | Euclidean |
//! | [`Cie94`] | Lab, LCHab | [`Cie94Profile`] weights |
//! | [`Ciede2000`] | Lab, LCHab | symmetric |
//! | [`Cmc`] | Lab, LCHab | [`CmcParams`] `l:c`, adapts to D65 |
//! | [`Din99`] | LCH99, LCH99b, LCH99c, LCH99d | same variant on both sides |
//!
//! Every calculator implements [`ColorDifference`]. Both colors must reduce
//! to the same rectangular type; LCh inputs are unrolled internally.
//!
//! # Example
//!
//! ```rust
//! use huepath_core::{Color, Whitepoint};
//! use huepath_diff::{Ciede2000, Cie76, ColorDifference};
//!
//! let a = Color::lab(50.0, 2.5, 0.0, Whitepoint::D65);
//! let b = Color::lab(73.0, 25.0, -18.0, Whitepoint::D65);
//!
//! let cie76 = Cie76::new(&a, &b)?.delta_e();
//! let de00 = Ciede2000::new(&a, &b)?.delta_e();
//! assert!(de00 < cie76);
//! # Ok::<(), huepath_diff::DiffError>(())
//! ```
//!
//! # Numeric edges
//!
//! Terms that are non-negative in exact arithmetic, such as
//! `Δa² + Δb² − ΔC²`, are clamped at zero before a square root.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod calculator;
mod cie76;
mod cie94;
mod ciede2000;
mod cmc;
mod din99;
mod error;

pub use calculator::{ColorDifference, SCRATCH_SLOTS};
pub use cie76::Cie76;
pub use cie94::{Cie94, Cie94Profile};
pub use ciede2000::Ciede2000;
pub use cmc::{Cmc, CmcParams};
pub use din99::Din99;
pub use error::{DiffError, DiffResult};
