//! # huepath-icc
//!
//! Device profiles implementing [`huepath_core::DeviceProfile`].
//!
//! - [`MatrixShaperProfile`] - tone curves plus a device matrix into PCS XYZ,
//!   built from any [`RgbSpace`](huepath_core::RgbSpace) or gray space
//! - [`LabAbstractProfile`] - abstract Lab → Lab adjustment
//! - `LcmsProfile` - ICC files evaluated by Little CMS 2 (feature `lcms`,
//!   on by default)
//!
//! # Example
//!
//! ```rust
//! use huepath_core::{Color, ColorType, Colorspace, DeviceProfile};
//! use huepath_icc::MatrixShaperProfile;
//! use std::sync::Arc;
//!
//! let profile: Arc<dyn DeviceProfile> = Arc::new(MatrixShaperProfile::srgb());
//! let device = Color::new(ColorType::Rgb, &[0.2, 0.4, 0.6], Colorspace::Device(profile)).unwrap();
//! assert!(device.is_profile_associated());
//! ```
//!
//! # Profile connection space
//!
//! PCS XYZ is normalized to `Y = 1` with a D50 white; PCS Lab uses D50 and
//! `L` in 0..100.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod abstract_profile;
mod error;
#[cfg(feature = "lcms")]
mod lcms;
mod matrix_shaper;

pub use abstract_profile::LabAbstractProfile;
pub use error::{IccError, IccResult};
#[cfg(feature = "lcms")]
pub use lcms::LcmsProfile;
pub use matrix_shaper::MatrixShaperProfile;
