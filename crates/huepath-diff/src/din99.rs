//! DIN99 family differences.

use crate::calculator::{
    ColorDifference, Context, SCRATCH_SLOTS, check_pair, hue_difference, rectangular,
};
use crate::DiffResult;
use huepath_core::{Color, ColorType};

const DE: usize = 0;
const DC: usize = 1;
const DH: usize = 2;

/// Below this share of the summed chroma, the cross-product quotient is unstable.
const ANTIPODAL_EPS: f64 = 1e-4;

/// Euclidean ΔE in a DIN99 space.
///
/// Both colors must use the same variant (`Lch99`, `Lch99b`, `Lch99c` or
/// `Lch99d`). ΔH comes from the cross product of the two `(a, b)` vectors
/// and is positive when the second hue lies counter-clockwise of the first.
/// Near-opposite hues, where that quotient loses precision, take the
/// magnitude from `ΔE² − ΔL² − ΔC²`; exactly opposite hues count as positive.
#[derive(Debug, Clone)]
pub struct Din99 {
    ctx: Context,
}

impl Din99 {
    /// Binds the formula to two colors.
    pub fn new(first: &Color, second: &Color) -> DiffResult<Self> {
        check_pair(
            "DIN99",
            first,
            second,
            &[
                ColorType::Lch99,
                ColorType::Lch99b,
                ColorType::Lch99c,
                ColorType::Lch99d,
            ],
        )?;
        Ok(Self {
            ctx: Context::new(first, second),
        })
    }

    fn evaluate(&mut self) -> &[f64; SCRATCH_SLOTS] {
        let c1 = self.ctx.first().values()[1];
        let c2 = self.ctx.second().values()[1];
        let [l1, a1, b1] = rectangular(self.ctx.first());
        let [l2, a2, b2] = rectangular(self.ctx.second());
        let (dl, da, db) = (l1 - l2, a1 - a2, b1 - b2);

        let s = self.ctx.scratch();
        s[DE] = (dl * dl + da * da + db * db).sqrt();
        s[DC] = c1 - c2;
        let cross = a1 * b2 - a2 * b1;
        let denom = (2.0 * (c1 * c2 + a1 * a2 + b1 * b2)).max(0.0).sqrt();
        s[DH] = if denom > ANTIPODAL_EPS * (c1 + c2) {
            2.0 * cross / denom
        } else {
            hue_difference(da, db, c1 - c2).copysign(cross + 0.0)
        };
        s
    }
}

impl ColorDifference for Din99 {
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
