//! Conversion steps and paths.
//!
//! A [`ConversionStep`] is an unbound atomic operation: it names what to do
//! but carries no colorspace data. A [`ConversionPath`] is the ordered list
//! of steps converting one [`ColorType`] into another. Binding steps to the
//! source and target colorspaces is the compiler's job.

use huepath_core::{ColorType, Din99Variant};
use std::fmt;

/// Atomic conversion operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionStep {
    /// Decode RGB with the space's transfer curve.
    RgbToLinear,
    /// Encode linear RGB with the space's transfer curve.
    LinearToRgb,
    /// Linear RGB → XYZ by the space's primary matrix.
    LinearRgbToXyz,
    /// XYZ → linear RGB.
    XyzToLinearRgb,
    /// HSV → RGB.
    HsvToRgb,
    /// RGB → HSV.
    RgbToHsv,
    /// HSL → RGB.
    HslToRgb,
    /// RGB → HSL.
    RgbToHsl,
    /// CMY → RGB.
    CmyToRgb,
    /// RGB → CMY.
    RgbToCmy,
    /// CMYK → CMY.
    CmykToCmy,
    /// CMY → CMYK.
    CmyToCmyk,
    /// Gray → XYZ along the gray space's white.
    GrayToXyz,
    /// XYZ → gray from luminance.
    XyzToGray,
    /// XYZ → xyY.
    XyzToYxy,
    /// xyY → XYZ.
    YxyToXyz,
    /// XYZ → Lab.
    XyzToLab,
    /// Lab → XYZ.
    LabToXyz,
    /// XYZ → Luv.
    XyzToLuv,
    /// Luv → XYZ.
    LuvToXyz,
    /// Lab → LCHab.
    LabToLchAb,
    /// LCHab → Lab.
    LchAbToLab,
    /// Luv → LCHuv.
    LuvToLchUv,
    /// LCHuv → Luv.
    LchUvToLuv,
    /// XYZ → DIN99 cylindrical.
    XyzToLch99(Din99Variant),
    /// DIN99 cylindrical → XYZ.
    Lch99ToXyz(Din99Variant),
    /// Chromatic adaptation of XYZ from the source white to the target white.
    ///
    /// Marks the point where binding switches from the source colorspace to
    /// the target colorspace.
    Adapt,
}

impl ConversionStep {
    /// The step undoing this one.
    pub const fn inverse(self) -> Self {
        use ConversionStep::*;
        match self {
            RgbToLinear => LinearToRgb,
            LinearToRgb => RgbToLinear,
            LinearRgbToXyz => XyzToLinearRgb,
            XyzToLinearRgb => LinearRgbToXyz,
            HsvToRgb => RgbToHsv,
            RgbToHsv => HsvToRgb,
            HslToRgb => RgbToHsl,
            RgbToHsl => HslToRgb,
            CmyToRgb => RgbToCmy,
            RgbToCmy => CmyToRgb,
            CmykToCmy => CmyToCmyk,
            CmyToCmyk => CmykToCmy,
            GrayToXyz => XyzToGray,
            XyzToGray => GrayToXyz,
            XyzToYxy => YxyToXyz,
            YxyToXyz => XyzToYxy,
            XyzToLab => LabToXyz,
            LabToXyz => XyzToLab,
            XyzToLuv => LuvToXyz,
            LuvToXyz => XyzToLuv,
            LabToLchAb => LchAbToLab,
            LchAbToLab => LabToLchAb,
            LuvToLchUv => LchUvToLuv,
            LchUvToLuv => LuvToLchUv,
            XyzToLch99(v) => Lch99ToXyz(v),
            Lch99ToXyz(v) => XyzToLch99(v),
            Adapt => Adapt,
        }
    }
}

impl fmt::Display for ConversionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Steps taking a color type to XYZ.
pub fn to_xyz_steps(kind: ColorType) -> Vec<ConversionStep> {
    use ConversionStep::*;
    let rgb = [RgbToLinear, LinearRgbToXyz];
    match kind {
        ColorType::Xyz => vec![],
        ColorType::Yxy => vec![YxyToXyz],
        ColorType::Lab => vec![LabToXyz],
        ColorType::Luv => vec![LuvToXyz],
        ColorType::LchAb => vec![LchAbToLab, LabToXyz],
        ColorType::LchUv => vec![LchUvToLuv, LuvToXyz],
        ColorType::Rgb => rgb.to_vec(),
        ColorType::Hsv => [&[HsvToRgb][..], &rgb[..]].concat(),
        ColorType::Hsl => [&[HslToRgb][..], &rgb[..]].concat(),
        ColorType::Cmy => [&[CmyToRgb][..], &rgb[..]].concat(),
        ColorType::Cmyk => [&[CmykToCmy, CmyToRgb][..], &rgb[..]].concat(),
        ColorType::Gray => vec![GrayToXyz],
        din99 => match din99.din99_variant() {
            Some(v) => vec![Lch99ToXyz(v)],
            None => vec![],
        },
    }
}

/// Steps taking XYZ to a color type: the inverse of [`to_xyz_steps`].
pub fn from_xyz_steps(kind: ColorType) -> Vec<ConversionStep> {
    to_xyz_steps(kind)
        .into_iter()
        .rev()
        .map(ConversionStep::inverse)
        .collect()
}

/// An exact `(from, to)` conversion edge.
///
/// Two paths are equal when their endpoints and step lists are equal.
///
/// # Example
///
/// ```rust
/// use huepath_convert::{ConversionPath, ConversionStep};
/// use huepath_core::ColorType;
///
/// let path = ConversionPath::via_xyz(ColorType::LchAb, ColorType::Xyz);
/// assert_eq!(
///     path.steps(),
///     &[ConversionStep::LchAbToLab, ConversionStep::LabToXyz, ConversionStep::Adapt]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConversionPath {
    from: ColorType,
    to: ColorType,
    steps: Vec<ConversionStep>,
}

impl ConversionPath {
    /// Creates a path from explicit steps.
    pub fn new(from: ColorType, to: ColorType, steps: Vec<ConversionStep>) -> Self {
        Self { from, to, steps }
    }

    /// The default path: `from` → XYZ, adapt, XYZ → `to`.
    pub fn via_xyz(from: ColorType, to: ColorType) -> Self {
        let mut steps = to_xyz_steps(from);
        steps.push(ConversionStep::Adapt);
        steps.extend(from_xyz_steps(to));
        Self::new(from, to, steps)
    }

    /// Source type.
    pub fn from(&self) -> ColorType {
        self.from
    }

    /// Target type.
    pub fn to(&self) -> ColorType {
        self.to
    }

    /// Registry key.
    pub fn key(&self) -> (ColorType, ColorType) {
        (self.from, self.to)
    }

    /// Ordered steps.
    pub fn steps(&self) -> &[ConversionStep] {
        &self.steps
    }

    /// The reverse path.
    pub fn inverse(&self) -> Self {
        Self::new(
            self.to,
            self.from,
            self.steps.iter().rev().map(|s| s.inverse()).collect(),
        )
    }
}

impl fmt::Display for ConversionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: ", self.from, self.to)?;
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}
