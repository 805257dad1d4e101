//! CIE76: Euclidean distance in L*a*b* or L*u*v*.

use crate::calculator::{ColorDifference, Context, SCRATCH_SLOTS, check_pair, hue_difference, rectangular};
use crate::DiffResult;
use huepath_core::{Color, ColorType};

const DE: usize = 0;
const DC: usize = 1;
const DH: usize = 2;

/// ΔE*ab (or ΔE*uv) between two colors of the Lab or Luv family.
///
/// LCh inputs are unrolled to rectangular form first.
///
/// # Example
///
/// ```rust
/// use huepath_core::{Color, Whitepoint};
/// use huepath_diff::{Cie76, ColorDifference};
///
/// let a = Color::lab(50.0, 0.0, 0.0, Whitepoint::D65);
/// let b = Color::lab(53.0, 4.0, 0.0, Whitepoint::D65);
/// let mut cie76 = Cie76::new(&a, &b)?;
/// assert_eq!(cie76.delta_e(), 5.0);
/// # Ok::<(), huepath_diff::DiffError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Cie76 {
    ctx: Context,
}

impl Cie76 {
    /// Binds the formula to two colors.
    pub fn new(first: &Color, second: &Color) -> DiffResult<Self> {
        check_pair("CIE76", first, second, &[ColorType::Lab, ColorType::Luv])?;
        Ok(Self {
            ctx: Context::new(first, second),
        })
    }

    fn evaluate(&mut self) -> &[f64; SCRATCH_SLOTS] {
        let [l1, a1, b1] = rectangular(self.ctx.first());
        let [l2, a2, b2] = rectangular(self.ctx.second());
        let (dl, da, db) = (l1 - l2, a1 - a2, b1 - b2);
        let dc = a1.hypot(b1) - a2.hypot(b2);

        let s = self.ctx.scratch();
        s[DE] = (dl * dl + da * da + db * db).sqrt();
        s[DC] = dc;
        s[DH] = hue_difference(da, db, dc);
        s
    }
}

impl ColorDifference for Cie76 {
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

    #[test]
    fn test_reference_pair() {
        let a = Color::lab(78.012070941279, -109.730946283313, -69.750359159196, Whitepoint::D65);
        let b = Color::lab(82.925559104386, -33.693161514678, -74.75821654499, Whitepoint::D65);
        let mut de = Cie76::new(&a, &b).unwrap();
        assert_abs_diff_eq!(de.delta_e(), 76.360760302964, epsilon = 5e-5);
    }

    #[test]
    fn test_identical_colors() {
        let a = Color::luv(40.0, -12.0, 33.0, Whitepoint::D50);
        let mut de = Cie76::new(&a, &a).unwrap();
        assert_eq!(de.delta_e(), 0.0);
        assert_eq!(de.delta_c(), 0.0);
        assert_eq!(de.delta_h(), 0.0);
    }

    #[test]
    fn test_lch_matches_lab() {
        let lab = Color::lab(50.0, 0.0, 20.0, Whitepoint::D65);
        let lch = Color::lch_ab(50.0, 20.0, 90.0, Whitepoint::D65);
        let mut de = Cie76::new(&lab, &lch).unwrap();
        assert_abs_diff_eq!(de.delta_e(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pure_hue_shift() {
        // Same chroma, opposite hues: ΔC = 0, ΔH = ΔE.
        let a = Color::lab(50.0, 10.0, 0.0, Whitepoint::D65);
        let b = Color::lab(50.0, -10.0, 0.0, Whitepoint::D65);
        let mut de = Cie76::new(&a, &b).unwrap();
        assert_abs_diff_eq!(de.delta_e(), 20.0, epsilon = 1e-12);
        assert_abs_diff_eq!(de.delta_c(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(de.delta_h(), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_usable_after_dispose() {
        let a = Color::lab(50.0, 0.0, 0.0, Whitepoint::D65);
        let b = Color::lab(60.0, 0.0, 0.0, Whitepoint::D65);
        let mut de = Cie76::new(&a, &b).unwrap();
        de.dispose();
        de.dispose();
        assert_eq!(de.delta_e(), 10.0);
    }
}
