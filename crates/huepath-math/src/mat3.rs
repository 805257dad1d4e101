//! Row-major 3x3 matrix.
//!
//! [`Mat3`] carries RGB-to-XYZ primary matrices, chromatic adaptation
//! matrices and the pre-multiplied matrix stages of a fused conversion.
//! Vectors are columns, so `m.mul_vec(v)[i]` is row `i` dotted with `v`,
//! and `a.mul_mat(&b)` applies `b` first.

use crate::kernel::{self, Raw3};
use std::ops::{Index, Mul};

/// 3x3 `f64` matrix, rows outermost.
///
/// # Example
///
/// ```rust
/// use huepath_math::Mat3;
///
/// let scale = Mat3::diagonal(2.0, 1.0, 0.5);
/// assert_eq!(scale.mul_vec([1.0, 1.0, 1.0]), [2.0, 1.0, 0.5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    /// Rows
    pub m: Raw3,
}

impl Mat3 {
    /// The identity.
    pub const IDENTITY: Self = Self::diagonal(1.0, 1.0, 1.0);

    /// Builds a matrix from its rows.
    #[inline]
    pub const fn from_rows(rows: Raw3) -> Self {
        Self { m: rows }
    }

    /// Builds a matrix whose columns are `cols[0]`, `cols[1]`, `cols[2]`.
    #[inline]
    pub const fn from_cols(cols: Raw3) -> Self {
        let [a, b, c] = cols;
        Self {
            m: [[a[0], b[0], c[0]], [a[1], b[1], c[1]], [a[2], b[2], c[2]]],
        }
    }

    /// Diagonal matrix.
    #[inline]
    pub const fn diagonal(x: f64, y: f64, z: f64) -> Self {
        Self {
            m: [[x, 0.0, 0.0], [0.0, y, 0.0], [0.0, 0.0, z]],
        }
    }

    /// Transpose.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.m)
    }

    /// Determinant.
    #[inline]
    pub fn determinant(&self) -> f64 {
        kernel::determinant3(&self.m)
    }

    /// Adjugate over determinant.
    ///
    /// The determinant is not checked: singular input gives NaN or infinite
    /// entries, which [`Mat3::is_finite`] detects.
    ///
    /// ```rust
    /// use huepath_math::Mat3;
    ///
    /// let inv = Mat3::diagonal(2.0, 4.0, 5.0).inverse();
    /// assert_eq!(inv, Mat3::diagonal(0.5, 0.25, 0.2));
    /// ```
    #[inline]
    pub fn inverse(&self) -> Self {
        Self::from_rows(kernel::invert3(&self.m))
    }

    /// `self · v`.
    #[inline]
    pub fn mul_vec(&self, v: [f64; 3]) -> [f64; 3] {
        kernel::mul3x3_vec(&self.m, &v)
    }

    /// Applies the matrix to `v[..3]`, leaving any further values alone.
    #[inline]
    pub fn transform_in_place(&self, v: &mut [f64]) {
        kernel::mul3x3_vec_in_place(&self.m, v);
    }

    /// `self · other`.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        Self::from_rows(kernel::mul3x3_mat(&self.m, &other.m))
    }

    /// No NaN or infinite entry.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Every entry within `eps` of [`Mat3::IDENTITY`].
    pub fn is_identity(&self, eps: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(Self::IDENTITY.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= eps)
    }

    /// glam stores columns, so this transposes.
    #[inline]
    pub fn to_glam(&self) -> glam::DMat3 {
        glam::DMat3::from_cols_array_2d(&self.transpose().m)
    }

    /// From a glam matrix.
    #[inline]
    pub fn from_glam(m: glam::DMat3) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<[f64; 3]> for Mat3 {
    type Output = [f64; 3];

    #[inline]
    fn mul(self, rhs: [f64; 3]) -> [f64; 3] {
        self.mul_vec(rhs)
    }
}

impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl Index<usize> for Mat3 {
    type Output = [f64; 3];

    #[inline]
    fn index(&self, row: usize) -> &[f64; 3] {
        &self.m[row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const M: Mat3 = Mat3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);

    #[test]
    fn test_from_cols_is_transposed_rows() {
        let cols = Mat3::from_cols(M.m);
        assert_eq!(cols[0], [1.0, 0.0, 5.0]);
        assert_eq!(cols.transpose(), M);
    }

    #[test]
    fn test_inverse() {
        assert_abs_diff_eq!(M.determinant(), 1.0, epsilon = 1e-12);
        assert!((M * M.inverse()).is_identity(1e-12));
        assert!((M.inverse() * M).is_identity(1e-12));
    }

    #[test]
    fn test_singular_inverse_is_not_finite() {
        let rank2 = Mat3::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 1.0, 1.0]]);
        assert!(!rank2.inverse().is_finite());
    }

    #[test]
    fn test_mul_order() {
        // scale first, then swap x and y
        let swap = Mat3::from_rows([[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        let scale = Mat3::diagonal(2.0, 3.0, 4.0);
        assert_eq!(swap.mul_mat(&scale) * [1.0, 1.0, 1.0], [3.0, 2.0, 4.0]);
    }

    #[test]
    fn test_transform_in_place_keeps_fourth_value() {
        let mut v = [1.0, 1.0, 1.0, 0.25];
        Mat3::diagonal(2.0, 3.0, 4.0).transform_in_place(&mut v);
        assert_eq!(v, [2.0, 3.0, 4.0, 0.25]);
    }

    #[test]
    fn test_glam_interop() {
        let g = M.to_glam();
        assert_eq!(g.x_axis.z, 5.0);
        assert_eq!(Mat3::from_glam(g), M);

        let v = g * glam::DVec3::new(0.1, 0.2, 0.3);
        let ours = M.mul_vec([0.1, 0.2, 0.3]);
        assert_abs_diff_eq!(v.x, ours[0], epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, ours[1], epsilon = 1e-12);
        assert_abs_diff_eq!(v.z, ours[2], epsilon = 1e-12);
    }
}
