//! CIEDE2000.
//!
//! Follows Sharma, Wu and Dalal, "The CIEDE2000 Color-Difference Formula:
//! Implementation Notes, Supplementary Test Data, and Mathematical
//! Observations" (2005), with `kL = kC = kH = 1`.

use crate::calculator::{ColorDifference, Context, SCRATCH_SLOTS, check_pair, rectangular};
use crate::DiffResult;
use huepath_core::{Color, ColorType};
use std::f64::consts::{PI, TAU};

/// 25⁷
const POW25_7: f64 = 6_103_515_625.0;

// Scratch slots
const C1: usize = 0;
const C2: usize = 1;
const H1: usize = 2;
const H2: usize = 3;
const DL: usize = 4;
const DC: usize = 5;
const DH: usize = 6;
const SL: usize = 7;
const SC: usize = 8;
const SH: usize = 9;
const RT: usize = 10;
const DE: usize = 11;

/// ΔE00 between two Lab-family colors. Symmetric in its operands.
///
/// # Example
///
/// ```rust
/// use huepath_core::{Color, Whitepoint};
/// use huepath_diff::{Ciede2000, ColorDifference};
///
/// let a = Color::lab(50.0, 2.6772, -79.7751, Whitepoint::D65);
/// let b = Color::lab(50.0, 0.0, -82.7485, Whitepoint::D65);
/// let de = Ciede2000::new(&a, &b)?.delta_e();
/// assert!((de - 2.0425).abs() < 1e-4);
/// # Ok::<(), huepath_diff::DiffError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Ciede2000 {
    ctx: Context,
}

/// Hue angle of `(a', b)` in `[0, 2π)`; zero for the achromatic axis.
#[inline]
fn hue(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a);
    if h < 0.0 { h + TAU } else { h }
}

impl Ciede2000 {
    /// Binds the formula to two colors.
    pub fn new(first: &Color, second: &Color) -> DiffResult<Self> {
        check_pair("CIEDE2000", first, second, &[ColorType::Lab])?;
        Ok(Self {
            ctx: Context::new(first, second),
        })
    }

    fn evaluate(&mut self) -> &[f64; SCRATCH_SLOTS] {
        let [l1, a1, b1] = rectangular(self.ctx.first());
        let [l2, a2, b2] = rectangular(self.ctx.second());
        let s = self.ctx.scratch();

        let c_bar = (a1.hypot(b1) + a2.hypot(b2)) / 2.0;
        let c_bar7 = c_bar.powi(7);
        let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + POW25_7)).sqrt());
        let (a1p, a2p) = (a1 * (1.0 + g), a2 * (1.0 + g));

        s[C1] = a1p.hypot(b1);
        s[C2] = a2p.hypot(b2);
        s[H1] = hue(a1p, b1);
        s[H2] = hue(a2p, b2);
        let chroma_product = s[C1] * s[C2];

        s[DL] = l1 - l2;
        s[DC] = s[C1] - s[C2];
        let dh = if chroma_product == 0.0 {
            0.0
        } else {
            let d = s[H1] - s[H2];
            if d > PI {
                d - TAU
            } else if d < -PI {
                d + TAU
            } else {
                d
            }
        };
        s[DH] = 2.0 * chroma_product.sqrt() * (dh / 2.0).sin();

        let l_bar = (l1 + l2) / 2.0;
        let c_bar_p = (s[C1] + s[C2]) / 2.0;
        let h_sum = s[H1] + s[H2];
        let h_bar = if chroma_product == 0.0 {
            h_sum
        } else if (s[H1] - s[H2]).abs() <= PI {
            h_sum / 2.0
        } else if h_sum < TAU {
            (h_sum + TAU) / 2.0
        } else {
            (h_sum - TAU) / 2.0
        };

        let t = 1.0 - 0.17 * (h_bar - 30f64.to_radians()).cos()
            + 0.24 * (2.0 * h_bar).cos()
            + 0.32 * (3.0 * h_bar + 6f64.to_radians()).cos()
            - 0.20 * (4.0 * h_bar - 63f64.to_radians()).cos();

        let l50 = (l_bar - 50.0) * (l_bar - 50.0);
        s[SL] = 1.0 + 0.015 * l50 / (20.0 + l50).sqrt();
        s[SC] = 1.0 + 0.045 * c_bar_p;
        s[SH] = 1.0 + 0.015 * c_bar_p * t;

        let d_theta = 30f64.to_radians()
            * (-((h_bar - 275f64.to_radians()) / 25f64.to_radians()).powi(2)).exp();
        let c_bar_p7 = c_bar_p.powi(7);
        let rc = 2.0 * (c_bar_p7 / (c_bar_p7 + POW25_7)).sqrt();
        s[RT] = -rc * (2.0 * d_theta).sin();

        let (tl, tc, th) = (s[DL] / s[SL], s[DC] / s[SC], s[DH] / s[SH]);
        s[DE] = (tl * tl + tc * tc + th * th + s[RT] * tc * th).max(0.0).sqrt();
        s
    }
}

impl ColorDifference for Ciede2000 {
    fn delta_e(&mut self) -> f64 {
        self.evaluate()[DE]
    }

    /// ΔH′, signed.
    fn delta_h(&mut self) -> f64 {
        self.evaluate()[DH]
    }

    /// ΔC′ of the G-adjusted chromas.
    fn delta_c(&mut self) -> f64 {
        self.evaluate()[DC]
    }

    fn dispose(&mut self) {
        self.ctx.release();
    }
}
