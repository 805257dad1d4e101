//! Colorspaces a [`Color`](crate::Color) can be anchored to.

use crate::{ColorType, DeviceProfile, Family, RgbSpace, TransferCurve, Whitepoint};
use std::fmt;
use std::sync::Arc;

/// Gray colorspace: a white and a transfer curve.
///
/// Gray maps to XYZ along the white's axis: `Y = to_linear(g)`,
/// `X = Y · Xw`, `Z = Y · Zw`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraySpace {
    /// Reference white
    pub white: Whitepoint,
    /// Companding
    pub transfer: TransferCurve,
}

impl GraySpace {
    /// Creates a gray space.
    pub const fn new(white: Whitepoint, transfer: TransferCurve) -> Self {
        Self { white, transfer }
    }
}

impl Default for GraySpace {
    /// D65 with the sRGB curve.
    fn default() -> Self {
        Self::new(Whitepoint::D65, TransferCurve::Srgb)
    }
}

/// The space a color's numbers are relative to.
#[derive(Debug, Clone)]
pub enum Colorspace {
    /// CIE and DIN99 types, relative to a reference white.
    Cie(Whitepoint),
    /// RGB family types.
    Rgb(Arc<RgbSpace>),
    /// Gray.
    Gray(GraySpace),
    /// Values tied to a device profile, either as device data or as PCS.
    Device(Arc<dyn DeviceProfile>),
}

impl Colorspace {
    /// Reference white. For a profile this is its PCS white.
    pub fn reference_white(&self) -> Whitepoint {
        match self {
            Self::Cie(w) => *w,
            Self::Rgb(space) => space.white(),
            Self::Gray(gray) => gray.white,
            Self::Device(profile) => profile.pcs_white(),
        }
    }

    /// The attached profile, if any.
    pub fn profile(&self) -> Option<&Arc<dyn DeviceProfile>> {
        match self {
            Self::Device(profile) => Some(profile),
            _ => None,
        }
    }

    /// Can a plain (non-profile) color of type `kind` live here?
    pub(crate) fn carries_family(&self, kind: ColorType) -> bool {
        match (self, kind.family()) {
            (Self::Cie(_), Family::Cie | Family::Din99) => true,
            (Self::Rgb(_), Family::Rgb) => true,
            (Self::Gray(_), Family::Gray) => true,
            _ => false,
        }
    }
}

impl PartialEq for Colorspace {
    /// Profiles compare by identity, everything else by value.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Cie(a), Self::Cie(b)) => a == b,
            (Self::Rgb(a), Self::Rgb(b)) => Arc::ptr_eq(a, b) || a == b,
            (Self::Gray(a), Self::Gray(b)) => a == b,
            (Self::Device(a), Self::Device(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Colorspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cie(w) => write!(f, "CIE (white {:.4}, {:.4})", w.cx(), w.cy()),
            Self::Rgb(space) => write!(f, "{space}"),
            Self::Gray(gray) => write!(f, "gray ({})", gray.transfer),
            Self::Device(profile) => write!(f, "profile '{}'", profile.description()),
        }
    }
}

impl From<Whitepoint> for Colorspace {
    fn from(w: Whitepoint) -> Self {
        Self::Cie(w)
    }
}

impl From<RgbSpace> for Colorspace {
    fn from(space: RgbSpace) -> Self {
        Self::Rgb(Arc::new(space))
    }
}

impl From<Arc<RgbSpace>> for Colorspace {
    fn from(space: Arc<RgbSpace>) -> Self {
        Self::Rgb(space)
    }
}

impl From<GraySpace> for Colorspace {
    fn from(gray: GraySpace) -> Self {
        Self::Gray(gray)
    }
}
