//! CMC l:c.

use crate::calculator::{ColorDifference, Context, SCRATCH_SLOTS, check_pair, hue_difference, rectangular};
use crate::DiffResult;
use huepath_convert::{ColorConverter, ops};
use huepath_core::{Color, ColorType, Colorspace, Whitepoint};
use tracing::debug;

const DE: usize = 0;
const DC: usize = 1;
const DH: usize = 2;
const SL: usize = 3;
const SC: usize = 4;
const SH: usize = 5;

/// Lightness and chroma weights `l:c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CmcParams {
    /// Lightness weight `l`
    pub lightness: f64,
    /// Chroma weight `c`
    pub chroma: f64,
}

impl CmcParams {
    /// 1:1, for perceptibility.
    pub const PERCEPTIBILITY: Self = Self::new(1.0, 1.0);
    /// 2:1, for acceptability.
    pub const ACCEPTABILITY: Self = Self::new(2.0, 1.0);

    /// Custom weights.
    pub const fn new(lightness: f64, chroma: f64) -> Self {
        Self { lightness, chroma }
    }
}

impl Default for CmcParams {
    fn default() -> Self {
        Self::PERCEPTIBILITY
    }
}

/// CMC l:c between two Lab-family colors.
///
/// The formula is defined under D65. Colors with another reference white
/// are adapted on private copies when the calculator is built; the caller's
/// colors are left untouched. Weights come from the first color, so the
/// formula is not symmetric.
#[derive(Debug, Clone)]
pub struct Cmc {
    ctx: Context,
    params: CmcParams,
    first_d65: [f64; 3],
    second_d65: [f64; 3],
}

/// Rectangular Lab of `color` under D65, converting a copy when needed.
fn lab_d65(color: &Color) -> DiffResult<[f64; 3]> {
    if color.reference_white() == Whitepoint::D65 && !color.is_profile_associated() {
        return Ok(rectangular(color));
    }
    debug!("CMC: adapting {} from {} to D65", color.kind(), color.space());
    let target = Color::zeroed(ColorType::Lab, Colorspace::Cie(Whitepoint::D65))?;
    let mut converter = ColorConverter::new(color.clone(), target)?;
    let v = converter.convert()?.values();
    Ok([v[0], v[1], v[2]])
}

impl Cmc {
    /// Binds the formula with 1:1 weights.
    pub fn new(first: &Color, second: &Color) -> DiffResult<Self> {
        Self::with_params(first, second, CmcParams::PERCEPTIBILITY)
    }

    /// Binds the formula with the given weights.
    pub fn with_params(first: &Color, second: &Color, params: CmcParams) -> DiffResult<Self> {
        check_pair("CMC", first, second, &[ColorType::Lab])?;
        Ok(Self {
            ctx: Context::new(first, second),
            params,
            first_d65: lab_d65(first)?,
            second_d65: lab_d65(second)?,
        })
    }

    /// Active weights.
    pub fn params(&self) -> CmcParams {
        self.params
    }

    /// First operand as D65 Lab.
    pub fn first_d65(&self) -> [f64; 3] {
        self.first_d65
    }

    /// Second operand as D65 Lab.
    pub fn second_d65(&self) -> [f64; 3] {
        self.second_d65
    }

    fn evaluate(&mut self) -> &[f64; SCRATCH_SLOTS] {
        let [l1, a1, b1] = self.first_d65;
        let [l2, a2, b2] = self.second_d65;
        let CmcParams { lightness, chroma } = self.params;

        let c1 = a1.hypot(b1);
        let dc = c1 - a2.hypot(b2);
        let h1 = ops::normalize_hue(b1.atan2(a1).to_degrees());

        let t = hue_weight(h1);
        let c1_4 = c1.powi(4);
        let f = (c1_4 / (c1_4 + 1900.0)).sqrt();

        let s = self.ctx.scratch();
        s[DC] = dc;
        s[DH] = hue_difference(a1 - a2, b1 - b2, dc);
        s[SL] = if l1 < 16.0 {
            0.511
        } else {
            0.040975 * l1 / (1.0 + 0.01765 * l1)
        };
        s[SC] = 0.0638 * c1 / (1.0 + 0.0131 * c1) + 0.638;
        s[SH] = s[SC] * (f * t + 1.0 - f);

        let tl = (l1 - l2) / (lightness * s[SL]);
        let tc = dc / (chroma * s[SC]);
        let th = s[DH] / s[SH];
        s[DE] = (tl * tl + tc * tc + th * th).sqrt();
        s
    }
}

/// The `T` term of `SH` for a first-color hue in degrees, `[0, 360)`.
///
/// Both ends of `[164, 345]` belong to the inner band.
fn hue_weight(h1: f64) -> f64 {
    if (164.0..=345.0).contains(&h1) {
        0.56 + (0.2 * (h1 + 168.0).to_radians().cos()).abs()
    } else {
        0.36 + (0.4 * (h1 + 35.0).to_radians().cos()).abs()
    }
}

impl ColorDifference for Cmc {
    fn delta_e(&mut self) -> f64 {
        self.evaluate()[DE]
    }

    fn delta_h(&mut self) -> f64 {
        self.evaluate()[DH]
    }

    fn delta_c(&mut self) -> f64 {
        self.evaluate()[DC]
    }

    fn dispose(&mut self) {
        self.ctx.release();
    }
}
