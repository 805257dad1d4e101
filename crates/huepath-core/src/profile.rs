//! Device profile contract.
//!
//! A device profile maps values of its data colorspace to and from a profile
//! connection space (PCS, either XYZ or Lab). Parsing ICC data is not this
//! crate's business: anything implementing [`DeviceProfile`] can anchor a
//! [`Color`](crate::Color).

use crate::{ColorType, Whitepoint};
use std::fmt;

/// ICC profile/device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileClass {
    /// Input device (scanner, camera).
    Input,
    /// Display device.
    Display,
    /// Output device (printer).
    Output,
    /// Device link: device to device, no PCS side.
    DeviceLink,
    /// Colorspace conversion profile.
    ColorSpace,
    /// Abstract: PCS to PCS.
    Abstract,
    /// Named color list.
    NamedColor,
}

impl fmt::Display for ProfileClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Input => "input",
            Self::Display => "display",
            Self::Output => "output",
            Self::DeviceLink => "device link",
            Self::ColorSpace => "colorspace",
            Self::Abstract => "abstract",
            Self::NamedColor => "named color",
        };
        f.write_str(s)
    }
}

/// A profile mediating between device values and a PCS.
///
/// `to_pcs` and `from_pcs` read `input` and write `output`; both slices are
/// at least as long as the relevant type's channel count. PCS XYZ is
/// normalized to `Y = 1`, PCS Lab uses `L` in 0..100.
pub trait DeviceProfile: fmt::Debug {
    /// Human readable description.
    fn description(&self) -> &str;

    /// Profile class.
    fn class(&self) -> ProfileClass;

    /// Type of the device-side values.
    fn data_colorspace(&self) -> ColorType;

    /// Type of the connection space, `Xyz` or `Lab`.
    fn pcs(&self) -> ColorType;

    /// Reference white of the connection space.
    fn pcs_white(&self) -> Whitepoint {
        Whitepoint::D50
    }

    /// Device values → PCS values.
    fn to_pcs(&self, input: &[f64], output: &mut [f64]);

    /// PCS values → device values.
    fn from_pcs(&self, input: &[f64], output: &mut [f64]);
}
