//! RGB colorspaces: primaries, reference white and transfer curve.
//!
//! The RGB→XYZ matrix is derived from the primaries' chromaticities and the
//! reference white once, when the space is built, and cached together with
//! its inverse.
//!
//! # Algorithm
//!
//! 1. Convert each primary's xy chromaticity to XYZ with `Y = 1`
//! 2. Solve `M · S = W` for the per-primary scale `S`
//! 3. Scale the primary columns by `S`
//!
//! # Presets
//!
//! | Space | White | Curve |
//! |-------|-------|-------|
//! | sRGB | D65 | sRGB |
//! | Adobe RGB (1998) | D65 | 2.2 |
//! | Apple RGB | D65 | 1.8 |
//! | Best RGB | D50 | 2.2 |
//! | Beta RGB | D50 | 2.2 |
//! | Bruce RGB | D65 | 2.2 |
//! | CIE RGB | E | 2.2 |
//! | ColorMatch RGB | D50 | 1.8 |
//! | Don RGB 4 | D50 | 2.2 |
//! | ECI RGB v2 | D50 | L* |
//! | Ekta Space PS5 | D50 | 2.2 |
//! | NTSC RGB | C | 2.2 |
//! | PAL/SECAM RGB | D65 | 2.2 |
//! | ProPhoto RGB | D50 | 1.8 |
//! | SMPTE-C RGB | D65 | 2.2 |
//! | Wide Gamut RGB | D50 | 2.2 |
//! | Rec.709 | D65 | Rec.709 |
//! | Rec.2020 | D65 | Rec.709 |

use crate::{CoreError, CoreResult, TransferCurve, Whitepoint};
use huepath_math::Mat3;
use std::fmt;
use std::str::FromStr;

/// Chromaticities of the three RGB primaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y)
    pub r: (f64, f64),
    /// Green primary (x, y)
    pub g: (f64, f64),
    /// Blue primary (x, y)
    pub b: (f64, f64),
}

/// An RGB colorspace.
///
/// # Example
///
/// ```rust
/// use huepath_core::RgbSpace;
///
/// let srgb = RgbSpace::srgb();
/// let xyz = srgb.to_xyz_matrix().mul_vec([1.0, 1.0, 1.0]);
/// // White maps to the reference white
/// assert!((xyz[0] - 0.95047).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RgbSpace {
    name: String,
    primaries: Primaries,
    white: Whitepoint,
    transfer: TransferCurve,
    to_xyz: Mat3,
    from_xyz: Mat3,
}

impl RgbSpace {
    /// Builds a space and computes its primary matrices.
    ///
    /// Degenerate primaries (collinear chromaticities, a zero y) are not
    /// rejected; the matrices then contain NaN/Inf.
    pub fn new(
        name: impl Into<String>,
        primaries: Primaries,
        white: Whitepoint,
        transfer: TransferCurve,
    ) -> Self {
        let to_xyz = rgb_to_xyz_matrix(&primaries, white);
        Self {
            name: name.into(),
            primaries,
            white,
            transfer,
            to_xyz,
            from_xyz: to_xyz.inverse(),
        }
    }

    /// Space name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Primaries chromaticities.
    pub fn primaries(&self) -> &Primaries {
        &self.primaries
    }

    /// Reference white.
    pub fn white(&self) -> Whitepoint {
        self.white
    }

    /// Transfer curve.
    pub fn transfer(&self) -> TransferCurve {
        self.transfer
    }

    /// Linear RGB → XYZ matrix.
    pub fn to_xyz_matrix(&self) -> &Mat3 {
        &self.to_xyz
    }

    /// XYZ → linear RGB matrix.
    pub fn from_xyz_matrix(&self) -> &Mat3 {
        &self.from_xyz
    }

    /// Decodes one channel to linear light.
    #[inline]
    pub fn to_linear(&self, v: f64) -> f64 {
        self.transfer.to_linear(v)
    }

    /// Encodes one linear channel.
    #[inline]
    pub fn to_non_linear(&self, v: f64) -> f64 {
        self.transfer.to_non_linear(v)
    }

    /// sRGB (IEC 61966-2-1).
    pub fn srgb() -> Self {
        Self::preset(Preset::Srgb)
    }

    /// Adobe RGB (1998).
    pub fn adobe_rgb() -> Self {
        Self::preset(Preset::AdobeRgb)
    }

    /// ProPhoto RGB (ROMM).
    pub fn prophoto_rgb() -> Self {
        Self::preset(Preset::ProPhotoRgb)
    }

    /// ITU-R BT.2020.
    pub fn rec2020() -> Self {
        Self::preset(Preset::Rec2020)
    }

    /// Builds a named preset.
    pub fn preset(preset: Preset) -> Self {
        let (name, r, g, b, white, transfer) = preset.definition();
        Self::new(name, Primaries { r, g, b }, white, transfer)
    }
}

impl fmt::Display for RgbSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Built-in RGB spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Preset {
    Srgb,
    AdobeRgb,
    AppleRgb,
    BestRgb,
    BetaRgb,
    BruceRgb,
    CieRgb,
    ColorMatchRgb,
    DonRgb4,
    EciRgbV2,
    EktaSpacePs5,
    NtscRgb,
    PalSecamRgb,
    ProPhotoRgb,
    SmpteCRgb,
    WideGamutRgb,
    Rec709,
    Rec2020,
}

type PresetDefinition = (
    &'static str,
    (f64, f64),
    (f64, f64),
    (f64, f64),
    Whitepoint,
    TransferCurve,
);

impl Preset {
    /// Every preset, in declaration order.
    pub const ALL: [Preset; 18] = [
        Preset::Srgb,
        Preset::AdobeRgb,
        Preset::AppleRgb,
        Preset::BestRgb,
        Preset::BetaRgb,
        Preset::BruceRgb,
        Preset::CieRgb,
        Preset::ColorMatchRgb,
        Preset::DonRgb4,
        Preset::EciRgbV2,
        Preset::EktaSpacePs5,
        Preset::NtscRgb,
        Preset::PalSecamRgb,
        Preset::ProPhotoRgb,
        Preset::SmpteCRgb,
        Preset::WideGamutRgb,
        Preset::Rec709,
        Preset::Rec2020,
    ];

    fn definition(self) -> PresetDefinition {
        use TransferCurve::{Gamma, LStar, Rec709, Srgb};
        use Whitepoint as W;
        match self {
            Preset::Srgb => ("sRGB", (0.64, 0.33), (0.30, 0.60), (0.15, 0.06), W::D65, Srgb),
            Preset::AdobeRgb => ("Adobe RGB (1998)", (0.64, 0.33), (0.21, 0.71), (0.15, 0.06), W::D65, Gamma(2.2)),
            Preset::AppleRgb => ("Apple RGB", (0.625, 0.34), (0.28, 0.595), (0.155, 0.07), W::D65, Gamma(1.8)),
            Preset::BestRgb => ("Best RGB", (0.7347, 0.2653), (0.215, 0.775), (0.13, 0.035), W::D50, Gamma(2.2)),
            Preset::BetaRgb => ("Beta RGB", (0.6888, 0.3112), (0.1986, 0.7551), (0.1265, 0.0352), W::D50, Gamma(2.2)),
            Preset::BruceRgb => ("Bruce RGB", (0.64, 0.33), (0.28, 0.65), (0.15, 0.06), W::D65, Gamma(2.2)),
            Preset::CieRgb => ("CIE RGB", (0.735, 0.265), (0.274, 0.717), (0.167, 0.009), W::E, Gamma(2.2)),
            Preset::ColorMatchRgb => ("ColorMatch RGB", (0.63, 0.34), (0.295, 0.605), (0.15, 0.075), W::D50, Gamma(1.8)),
            Preset::DonRgb4 => ("Don RGB 4", (0.696, 0.30), (0.215, 0.765), (0.13, 0.035), W::D50, Gamma(2.2)),
            Preset::EciRgbV2 => ("ECI RGB v2", (0.67, 0.33), (0.21, 0.71), (0.14, 0.08), W::D50, LStar),
            Preset::EktaSpacePs5 => ("Ekta Space PS5", (0.695, 0.305), (0.26, 0.70), (0.11, 0.005), W::D50, Gamma(2.2)),
            Preset::NtscRgb => ("NTSC RGB", (0.67, 0.33), (0.21, 0.71), (0.14, 0.08), W::C, Gamma(2.2)),
            Preset::PalSecamRgb => ("PAL/SECAM RGB", (0.64, 0.33), (0.29, 0.60), (0.15, 0.06), W::D65, Gamma(2.2)),
            Preset::ProPhotoRgb => ("ProPhoto RGB", (0.7347, 0.2653), (0.1596, 0.8404), (0.0366, 0.0001), W::D50, Gamma(1.8)),
            Preset::SmpteCRgb => ("SMPTE-C RGB", (0.63, 0.34), (0.31, 0.595), (0.155, 0.07), W::D65, Gamma(2.2)),
            Preset::WideGamutRgb => ("Wide Gamut RGB", (0.735, 0.265), (0.115, 0.826), (0.157, 0.018), W::D50, Gamma(2.2)),
            Preset::Rec709 => ("Rec.709", (0.64, 0.33), (0.30, 0.60), (0.15, 0.06), W::D65, Rec709),
            Preset::Rec2020 => ("Rec.2020", (0.708, 0.292), (0.170, 0.797), (0.131, 0.046), W::D65, Rec709),
        }
    }
}

impl FromStr for Preset {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        let preset = match key.as_str() {
            "srgb" => Preset::Srgb,
            "adobergb" | "adobergb1998" | "adobe" => Preset::AdobeRgb,
            "applergb" => Preset::AppleRgb,
            "bestrgb" => Preset::BestRgb,
            "betargb" => Preset::BetaRgb,
            "brucergb" => Preset::BruceRgb,
            "ciergb" => Preset::CieRgb,
            "colormatchrgb" => Preset::ColorMatchRgb,
            "donrgb4" => Preset::DonRgb4,
            "ecirgbv2" | "ecirgb" => Preset::EciRgbV2,
            "ektaspaceps5" => Preset::EktaSpacePs5,
            "ntscrgb" | "ntsc" => Preset::NtscRgb,
            "palsecamrgb" | "pal" => Preset::PalSecamRgb,
            "prophotorgb" | "prophoto" => Preset::ProPhotoRgb,
            "smptecrgb" | "smptec" => Preset::SmpteCRgb,
            "widegamutrgb" => Preset::WideGamutRgb,
            "rec709" | "bt709" => Preset::Rec709,
            "rec2020" | "bt2020" => Preset::Rec2020,
            _ => {
                return Err(CoreError::UnknownName {
                    what: "rgb space",
                    name: s.to_string(),
                });
            }
        };
        Ok(preset)
    }
}

/// Converts xy chromaticity to XYZ (with Y=1).
fn xy_to_xyz(x: f64, y: f64) -> [f64; 3] {
    [x / y, 1.0, (1.0 - x - y) / y]
}

/// Computes the linear RGB → XYZ matrix for the primaries under `white`.
pub fn rgb_to_xyz_matrix(primaries: &Primaries, white: Whitepoint) -> Mat3 {
    let r = xy_to_xyz(primaries.r.0, primaries.r.1);
    let g = xy_to_xyz(primaries.g.0, primaries.g.1);
    let b = xy_to_xyz(primaries.b.0, primaries.b.1);

    // Primaries as columns, then solve M · S = W
    let m = Mat3::from_cols([r, g, b]);
    let s = m.inverse().mul_vec(white.xyz());

    Mat3::from_cols([
        [r[0] * s[0], r[1] * s[0], r[2] * s[0]],
        [g[0] * s[1], g[1] * s[1], g[2] * s[1]],
        [b[0] * s[2], b[1] * s[2], b[2] * s[2]],
    ])
}
