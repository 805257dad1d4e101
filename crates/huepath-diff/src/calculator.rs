//! The calculator contract and the state every formula shares.

use crate::{DiffError, DiffResult};
use huepath_convert::ops;
use huepath_core::{Color, ColorType, Shape};

/// Number of scratch slots each calculator owns.
pub const SCRATCH_SLOTS: usize = 32;

/// A color difference formula bound to two colors.
///
/// Every call recomputes from the two snapshots taken at construction.
/// [`dispose`](Self::dispose) releases the scratch buffer; a later call
/// allocates a fresh one.
pub trait ColorDifference {
    /// Total difference ΔE.
    fn delta_e(&mut self) -> f64;

    /// Hue difference ΔH.
    fn delta_h(&mut self) -> f64;

    /// Chroma difference ΔC, first minus second.
    fn delta_c(&mut self) -> f64;

    /// Releases the scratch buffer. Idempotent.
    fn dispose(&mut self);
}

/// Two color snapshots and a lazily allocated scratch array.
#[derive(Debug, Clone)]
pub(crate) struct Context {
    first: Color,
    second: Color,
    scratch: Option<Box<[f64; SCRATCH_SLOTS]>>,
}

impl Context {
    pub fn new(first: &Color, second: &Color) -> Self {
        Self {
            first: first.clone(),
            second: second.clone(),
            scratch: None,
        }
    }

    pub fn first(&self) -> &Color {
        &self.first
    }

    pub fn second(&self) -> &Color {
        &self.second
    }

    /// Scratch slots. Contents do not survive between calls.
    pub fn scratch(&mut self) -> &mut [f64; SCRATCH_SLOTS] {
        self.scratch
            .get_or_insert_with(|| Box::new([0.0; SCRATCH_SLOTS]))
    }

    pub fn release(&mut self) {
        self.scratch = None;
    }

    #[cfg(test)]
    pub fn is_released(&self) -> bool {
        self.scratch.is_none()
    }
}

/// The rectangular type a color type reduces to: Lab for LCHab, Luv for
/// LCHuv. DIN99 types stay themselves since they only exist in LCh form.
pub(crate) fn rectangular_type(kind: ColorType) -> ColorType {
    match kind {
        ColorType::LchAb => ColorType::Lab,
        ColorType::LchUv => ColorType::Luv,
        other => other,
    }
}

/// `(L, a, b)`-style values of a color, cylindrical forms unrolled.
pub(crate) fn rectangular(color: &Color) -> [f64; 3] {
    let v = color.values();
    let v = [v[0], v[1], v[2]];
    match color.kind().shape() {
        Shape::Cylindrical { .. } => ops::cyl_to_rect(v),
        Shape::Rectangular => v,
    }
}

/// Checks that both colors reduce to the same accepted rectangular type.
pub(crate) fn check_pair(
    formula: &'static str,
    first: &Color,
    second: &Color,
    accepted: &[ColorType],
) -> DiffResult<()> {
    for color in [first, second] {
        if !accepted.contains(&rectangular_type(color.kind())) {
            return Err(DiffError::Unsupported {
                formula,
                kind: color.kind(),
            });
        }
    }
    if rectangular_type(first.kind()) != rectangular_type(second.kind()) {
        return Err(DiffError::FamilyMismatch {
            first: first.kind(),
            second: second.kind(),
        });
    }
    Ok(())
}

/// `sqrt(max(0, Δa² + Δb² − ΔC²))`: the hue difference magnitude.
#[inline]
pub(crate) fn hue_difference(da: f64, db: f64, dc: f64) -> f64 {
    (da * da + db * db - dc * dc).max(0.0).sqrt()
}
