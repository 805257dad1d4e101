//! Color type identifiers.
//!
//! A [`ColorType`] names one numeric representation (XYZ, Lab, RGB, ...).
//! The type fixes the channel count, the nominal channel bounds, the family
//! of colorspaces it can live in and whether its channels are rectangular or
//! cylindrical.

use crate::{CoreError, CoreResult};
use std::fmt;
use std::str::FromStr;

/// Representation family. Decides which colorspaces a type can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// CIE device-independent types, anchored to a reference white.
    Cie,
    /// DIN99 family (cylindrical, derived from Lab).
    Din99,
    /// RGB and its derivatives, anchored to an RGB space.
    Rgb,
    /// Single-channel gray.
    Gray,
}

/// Channel geometry of a color type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Channels are independent axes.
    Rectangular,
    /// One channel is a hue angle in degrees, another its radius.
    Cylindrical {
        /// Index of the chroma (or saturation) channel
        chroma: usize,
        /// Index of the hue channel
        hue: usize,
    },
}

/// DIN99 formula variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Din99Variant {
    /// DIN 6176 (2001).
    Din99,
    /// Cui et al. (2002), variant b.
    Din99b,
    /// Cui et al. (2002), variant c (modified X).
    Din99c,
    /// Cui et al. (2002), variant d (modified X).
    Din99d,
}

/// Constants of one DIN99 variant.
///
/// ```text
/// L99 = l_scale · ln(1 + l_coef · L)
/// e   =  a·cos θ + b·sin θ
/// f   = (-a·sin θ + b·cos θ) · f_factor
/// C99 = c_scale · ln(1 + c_coef · sqrt(e² + f²))
/// h99 = atan2(f, e) + hue_offset
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Din99Params {
    /// Lightness scale
    pub l_scale: f64,
    /// Lightness log coefficient
    pub l_coef: f64,
    /// Rotation of the (a, b) plane, degrees
    pub angle: f64,
    /// Compression of the rotated b axis
    pub f_factor: f64,
    /// Chroma scale
    pub c_scale: f64,
    /// Chroma log coefficient
    pub c_coef: f64,
    /// Added to the hue angle, degrees
    pub hue_offset: f64,
    /// Modified tristimulus `X' = x_factor · X − (x_factor − 1) · Z`; 1 leaves X alone
    pub x_factor: f64,
}

impl Din99Variant {
    /// Formula constants.
    pub const fn params(self) -> Din99Params {
        match self {
            Self::Din99 => Din99Params {
                l_scale: 105.51,
                l_coef: 0.0158,
                angle: 16.0,
                f_factor: 0.7,
                c_scale: 1.0 / 0.045,
                c_coef: 0.045,
                hue_offset: 0.0,
                x_factor: 1.0,
            },
            Self::Din99b => Din99Params {
                l_scale: 303.67,
                l_coef: 0.0039,
                angle: 26.0,
                f_factor: 0.83,
                c_scale: 23.0,
                c_coef: 0.075,
                hue_offset: 26.0,
                x_factor: 1.0,
            },
            Self::Din99c => Din99Params {
                l_scale: 317.65,
                l_coef: 0.0037,
                angle: 0.0,
                f_factor: 0.94,
                c_scale: 23.0,
                c_coef: 0.066,
                hue_offset: 0.0,
                x_factor: 1.1,
            },
            Self::Din99d => Din99Params {
                l_scale: 325.22,
                l_coef: 0.0036,
                angle: 50.0,
                f_factor: 1.14,
                c_scale: 22.5,
                c_coef: 0.06,
                hue_offset: 50.0,
                x_factor: 1.12,
            },
        }
    }
}

/// Identifier of a numeric color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorType {
    /// CIE 1931 XYZ, Y normalized to 1.
    Xyz,
    /// CIE xyY, stored as `[Y, x, y]`.
    Yxy,
    /// CIE 1976 L*a*b*.
    Lab,
    /// CIE 1976 L*u*v*.
    Luv,
    /// Cylindrical Lab: `[L, C, h]`.
    LchAb,
    /// Cylindrical Luv: `[L, C, h]`.
    LchUv,
    /// DIN99: `[L99, C99, h99]`.
    Lch99,
    /// DIN99b.
    Lch99b,
    /// DIN99c.
    Lch99c,
    /// DIN99d.
    Lch99d,
    /// Encoded (non-linear) RGB, 0..1.
    Rgb,
    /// `[h, s, v]`, hue in degrees.
    Hsv,
    /// `[h, s, l]`, hue in degrees.
    Hsl,
    /// Subtractive `1 − RGB`.
    Cmy,
    /// CMY with black extracted.
    Cmyk,
    /// Encoded gray, 0..1.
    Gray,
}

const XYZ_BOUNDS: &[(f64, f64)] = &[(0.0, 2.0), (0.0, 2.0), (0.0, 2.0)];
const YXY_BOUNDS: &[(f64, f64)] = &[(0.0, 1.0), (0.0, 1.0), (0.0, 1.0)];
const LAB_BOUNDS: &[(f64, f64)] = &[(0.0, 100.0), (-128.0, 127.0), (-128.0, 127.0)];
const LUV_BOUNDS: &[(f64, f64)] = &[(0.0, 100.0), (-134.0, 220.0), (-140.0, 122.0)];
const LCH_BOUNDS: &[(f64, f64)] = &[(0.0, 100.0), (0.0, 230.0), (0.0, 360.0)];
const LCH99_BOUNDS: &[(f64, f64)] = &[(0.0, 100.0), (0.0, 100.0), (0.0, 360.0)];
const UNIT3_BOUNDS: &[(f64, f64)] = &[(0.0, 1.0), (0.0, 1.0), (0.0, 1.0)];
const HUE_FIRST_BOUNDS: &[(f64, f64)] = &[(0.0, 360.0), (0.0, 1.0), (0.0, 1.0)];
const UNIT4_BOUNDS: &[(f64, f64)] = &[(0.0, 1.0), (0.0, 1.0), (0.0, 1.0), (0.0, 1.0)];
const UNIT1_BOUNDS: &[(f64, f64)] = &[(0.0, 1.0)];

impl ColorType {
    /// Every color type.
    pub const ALL: [ColorType; 16] = [
        ColorType::Xyz,
        ColorType::Yxy,
        ColorType::Lab,
        ColorType::Luv,
        ColorType::LchAb,
        ColorType::LchUv,
        ColorType::Lch99,
        ColorType::Lch99b,
        ColorType::Lch99c,
        ColorType::Lch99d,
        ColorType::Rgb,
        ColorType::Hsv,
        ColorType::Hsl,
        ColorType::Cmy,
        ColorType::Cmyk,
        ColorType::Gray,
    ];

    /// Number of channels.
    #[inline]
    pub const fn channels(self) -> usize {
        match self {
            Self::Cmyk => 4,
            Self::Gray => 1,
            _ => 3,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Xyz => "XYZ",
            Self::Yxy => "Yxy",
            Self::Lab => "Lab",
            Self::Luv => "Luv",
            Self::LchAb => "LCHab",
            Self::LchUv => "LCHuv",
            Self::Lch99 => "LCH99",
            Self::Lch99b => "LCH99b",
            Self::Lch99c => "LCH99c",
            Self::Lch99d => "LCH99d",
            Self::Rgb => "RGB",
            Self::Hsv => "HSV",
            Self::Hsl => "HSL",
            Self::Cmy => "CMY",
            Self::Cmyk => "CMYK",
            Self::Gray => "Gray",
        }
    }

    /// Representation family.
    pub const fn family(self) -> Family {
        match self {
            Self::Xyz | Self::Yxy | Self::Lab | Self::Luv | Self::LchAb | Self::LchUv => Family::Cie,
            Self::Lch99 | Self::Lch99b | Self::Lch99c | Self::Lch99d => Family::Din99,
            Self::Rgb | Self::Hsv | Self::Hsl | Self::Cmy | Self::Cmyk => Family::Rgb,
            Self::Gray => Family::Gray,
        }
    }

    /// Channel geometry.
    pub const fn shape(self) -> Shape {
        match self {
            Self::LchAb
            | Self::LchUv
            | Self::Lch99
            | Self::Lch99b
            | Self::Lch99c
            | Self::Lch99d => Shape::Cylindrical { chroma: 1, hue: 2 },
            Self::Hsv | Self::Hsl => Shape::Cylindrical { chroma: 1, hue: 0 },
            _ => Shape::Rectangular,
        }
    }

    /// Index of the hue channel, if any.
    pub const fn hue_channel(self) -> Option<usize> {
        match self.shape() {
            Shape::Cylindrical { hue, .. } => Some(hue),
            Shape::Rectangular => None,
        }
    }

    /// Index of the chroma (or saturation) channel, if any.
    pub const fn chroma_channel(self) -> Option<usize> {
        match self.shape() {
            Shape::Cylindrical { chroma, .. } => Some(chroma),
            Shape::Rectangular => None,
        }
    }

    /// DIN99 variant of an `Lch99*` type.
    pub const fn din99_variant(self) -> Option<Din99Variant> {
        match self {
            Self::Lch99 => Some(Din99Variant::Din99),
            Self::Lch99b => Some(Din99Variant::Din99b),
            Self::Lch99c => Some(Din99Variant::Din99c),
            Self::Lch99d => Some(Din99Variant::Din99d),
            _ => None,
        }
    }

    /// Nominal `(min, max)` per channel.
    ///
    /// Values outside the bounds are legal; conversions never clamp.
    pub const fn bounds(self) -> &'static [(f64, f64)] {
        match self {
            Self::Xyz => XYZ_BOUNDS,
            Self::Yxy => YXY_BOUNDS,
            Self::Lab => LAB_BOUNDS,
            Self::Luv => LUV_BOUNDS,
            Self::LchAb | Self::LchUv => LCH_BOUNDS,
            Self::Lch99 | Self::Lch99b | Self::Lch99c | Self::Lch99d => LCH99_BOUNDS,
            Self::Rgb | Self::Cmy => UNIT3_BOUNDS,
            Self::Hsv | Self::Hsl => HUE_FIRST_BOUNDS,
            Self::Cmyk => UNIT4_BOUNDS,
            Self::Gray => UNIT1_BOUNDS,
        }
    }

    /// True for the types a profile connection space can use.
    #[inline]
    pub const fn is_pcs_type(self) -> bool {
        matches!(self, Self::Xyz | Self::Lab)
    }
}

impl fmt::Display for ColorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorType {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        ColorType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownName {
                what: "color type",
                name: s.to_string(),
            })
    }
}
