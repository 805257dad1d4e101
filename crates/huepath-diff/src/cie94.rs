//! CIE94 with graphic arts and textile weights.

use crate::calculator::{ColorDifference, Context, SCRATCH_SLOTS, check_pair, hue_difference, rectangular};
use crate::DiffResult;
use huepath_core::{Color, ColorType};

const DE: usize = 0;
const DC: usize = 1;
const DH: usize = 2;
const SC: usize = 3;
const SH: usize = 4;

/// Application weights for CIE94.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cie94Profile {
    /// `SL = 1`, `K1 = 0.045`, `K2 = 0.015`
    #[default]
    GraphicArts,
    /// `SL = 2`, `K1 = 0.048`, `K2 = 0.014`
    Textiles,
}

impl Cie94Profile {
    /// `(SL, K1, K2)`.
    pub const fn weights(self) -> (f64, f64, f64) {
        match self {
            Self::GraphicArts => (1.0, 0.045, 0.015),
            Self::Textiles => (2.0, 0.048, 0.014),
        }
    }
}

/// ΔE*94 between two Lab-family colors.
///
/// The chroma and hue weights use the first color's chroma, so the formula
/// is not symmetric.
#[derive(Debug, Clone)]
pub struct Cie94 {
    ctx: Context,
    profile: Cie94Profile,
}

impl Cie94 {
    /// Binds the formula with graphic arts weights.
    pub fn new(first: &Color, second: &Color) -> DiffResult<Self> {
        Self::with_profile(first, second, Cie94Profile::GraphicArts)
    }

    /// Binds the formula with the given weights.
    pub fn with_profile(first: &Color, second: &Color, profile: Cie94Profile) -> DiffResult<Self> {
        check_pair("CIE94", first, second, &[ColorType::Lab])?;
        Ok(Self {
            ctx: Context::new(first, second),
            profile,
        })
    }

    /// Active weights.
    pub fn profile(&self) -> Cie94Profile {
        self.profile
    }

    fn evaluate(&mut self) -> &[f64; SCRATCH_SLOTS] {
        let (sl, k1, k2) = self.profile.weights();
        let [l1, a1, b1] = rectangular(self.ctx.first());
        let [l2, a2, b2] = rectangular(self.ctx.second());
        let c1 = a1.hypot(b1);
        let dc = c1 - a2.hypot(b2);
        let dh = hue_difference(a1 - a2, b1 - b2, dc);

        let s = self.ctx.scratch();
        s[DC] = dc;
        s[DH] = dh;
        s[SC] = 1.0 + k1 * c1;
        s[SH] = 1.0 + k2 * c1;
        let (tl, tc, th) = ((l1 - l2) / sl, dc / s[SC], dh / s[SH]);
        s[DE] = (tl * tl + tc * tc + th * th).sqrt();
        s
    }
}

impl ColorDifference for Cie94 {
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use huepath_core::Whitepoint;

    fn pair() -> (Color, Color) {
        (
            Color::lab(78.012070941279, -109.730946283313, -69.750359159196, Whitepoint::D65),
            Color::lab(82.925559104386, -33.693161514678, -74.75821654499, Whitepoint::D65),
        )
    }

    #[test]
    fn test_graphic_arts() {
        let (a, b) = pair();
        let mut de = Cie94::new(&a, &b).unwrap();
        assert_abs_diff_eq!(de.delta_e(), 21.804520621404, epsilon = 5e-5);
    }

    #[test]
    fn test_textiles() {
        let (a, b) = pair();
        let mut de = Cie94::with_profile(&a, &b, Cie94Profile::Textiles).unwrap();
        assert_eq!(de.profile(), Cie94Profile::Textiles);
        assert_abs_diff_eq!(de.delta_e(), 22.138541867301, epsilon = 5e-5);
    }

    #[test]
    fn test_lightness_only() {
        let a = Color::lab(50.0, 0.0, 0.0, Whitepoint::D65);
        let b = Color::lab(54.0, 0.0, 0.0, Whitepoint::D65);
        assert_eq!(Cie94::new(&a, &b).unwrap().delta_e(), 4.0);
        let mut textiles = Cie94::with_profile(&a, &b, Cie94Profile::Textiles).unwrap();
        assert_eq!(textiles.delta_e(), 2.0);
    }

    #[test]
    fn test_rejects_luv() {
        let a = Color::luv(50.0, 0.0, 0.0, Whitepoint::D65);
        assert!(Cie94::new(&a, &a).is_err());
    }
}
