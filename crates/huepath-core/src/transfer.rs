//! Transfer curves (companding) for RGB and gray colorspaces.
//!
//! `to_linear` decodes an encoded channel value into linear light,
//! `to_non_linear` encodes it again. Negative inputs are mirrored around
//! zero so that out-of-gamut values survive a round trip.

use std::fmt;

/// CIE epsilon (216 / 24389).
pub const CIE_EPSILON: f64 = 216.0 / 24389.0;
/// CIE kappa (24389 / 27).
pub const CIE_KAPPA: f64 = 24389.0 / 27.0;

/// Companding curve of an RGB or gray colorspace.
///
/// # Example
///
/// ```rust
/// use huepath_core::TransferCurve;
///
/// let srgb = TransferCurve::Srgb;
/// let lin = srgb.to_linear(0.5);
/// assert!((lin - 0.214041).abs() < 1e-6);
/// assert!((srgb.to_non_linear(lin) - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransferCurve {
    /// Identity.
    Linear,
    /// Pure power law with the given exponent.
    Gamma(f64),
    /// IEC 61966-2-1 piecewise curve.
    Srgb,
    /// ITU-R BT.709 camera curve.
    Rec709,
    /// CIE L* curve (ECI RGB v2).
    LStar,
}

impl TransferCurve {
    /// Decodes an encoded value to linear light.
    #[inline]
    pub fn to_linear(self, v: f64) -> f64 {
        mirrored(v, |v| match self {
            Self::Linear => v,
            Self::Gamma(g) => v.powf(g),
            Self::Srgb => {
                if v <= 0.04045 {
                    v / 12.92
                } else {
                    ((v + 0.055) / 1.055).powf(2.4)
                }
            }
            Self::Rec709 => {
                if v < 0.081 {
                    v / 4.5
                } else {
                    ((v + 0.099) / 1.099).powf(1.0 / 0.45)
                }
            }
            Self::LStar => {
                if v <= 0.08 {
                    100.0 * v / CIE_KAPPA
                } else {
                    ((v + 0.16) / 1.16).powi(3)
                }
            }
        })
    }

    /// Encodes a linear value.
    #[inline]
    pub fn to_non_linear(self, v: f64) -> f64 {
        mirrored(v, |v| match self {
            Self::Linear => v,
            Self::Gamma(g) => v.powf(1.0 / g),
            Self::Srgb => {
                if v <= 0.0031308 {
                    v * 12.92
                } else {
                    1.055 * v.powf(1.0 / 2.4) - 0.055
                }
            }
            Self::Rec709 => {
                if v < 0.018 {
                    4.5 * v
                } else {
                    1.099 * v.powf(0.45) - 0.099
                }
            }
            Self::LStar => {
                if v <= CIE_EPSILON {
                    v * CIE_KAPPA / 100.0
                } else {
                    1.16 * v.cbrt() - 0.16
                }
            }
        })
    }

    /// Returns true for the identity curve.
    #[inline]
    pub fn is_linear(self) -> bool {
        matches!(self, Self::Linear) || self == Self::Gamma(1.0)
    }
}

impl fmt::Display for TransferCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("linear"),
            Self::Gamma(g) => write!(f, "gamma {g}"),
            Self::Srgb => f.write_str("sRGB"),
            Self::Rec709 => f.write_str("Rec.709"),
            Self::LStar => f.write_str("L*"),
        }
    }
}

#[inline]
fn mirrored(v: f64, f: impl Fn(f64) -> f64) -> f64 {
    if v < 0.0 { -f(-v) } else { f(v) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [TransferCurve; 5] = [
        TransferCurve::Linear,
        TransferCurve::Gamma(2.2),
        TransferCurve::Srgb,
        TransferCurve::Rec709,
        TransferCurve::LStar,
    ];

    #[test]
    fn test_roundtrip() {
        for curve in CURVES {
            for i in 0..=100 {
                let v = i as f64 / 100.0;
                let back = curve.to_non_linear(curve.to_linear(v));
                assert!((v - back).abs() < 1e-10, "{curve}: v={v}, back={back}");
            }
        }
    }

    #[test]
    fn test_endpoints() {
        for curve in CURVES {
            assert_eq!(curve.to_linear(0.0), 0.0);
            assert!((curve.to_linear(1.0) - 1.0).abs() < 1e-3, "{curve}");
        }
    }

    #[test]
    fn test_negative_mirrored() {
        let c = TransferCurve::Gamma(2.2);
        assert_eq!(c.to_linear(-0.5), -c.to_linear(0.5));
    }

    #[test]
    fn test_lstar_midpoint() {
        // L* = 50 sits at 18.42% luminance
        assert!((TransferCurve::LStar.to_linear(0.5) - 0.184187).abs() < 1e-5);
    }
}
