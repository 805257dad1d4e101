//! Raw-array matrix primitives.
//!
//! These work on plain `[[f64; 3]; 3]` / slice storage so that callers can
//! keep their buffers as ordinary owned arrays. The in-place variants compute
//! into a temporary first, so the input and output may be the same buffer.
//!
//! Singular input is a caller error: [`invert3`] divides by the determinant
//! without checking it.

/// Row-major 3x3 storage.
pub type Raw3 = [[f64; 3]; 3];

/// Determinant of a 3x3 matrix.
#[inline]
pub fn determinant3(m: &Raw3) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Inverts a 3x3 matrix via determinant and adjugate.
///
/// A singular matrix produces NaN/Inf entries.
///
/// ```rust
/// use huepath_math::kernel::invert3;
///
/// let inv = invert3(&[[2.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 8.0]]);
/// assert_eq!(inv[1][1], 0.25);
/// ```
pub fn invert3(m: &Raw3) -> Raw3 {
    let inv_det = 1.0 / determinant3(m);
    [
        [
            (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
            (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
            (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
        ],
        [
            (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
            (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
            (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
        ],
        [
            (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
            (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
            (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
        ],
    ]
}

/// `m · v`, returning a new vector.
#[inline]
pub fn mul3x3_vec(m: &Raw3, v: &[f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// `v ← m · v` on the first three elements of `v`.
///
/// Reads all three inputs before writing, so the slice is both source and
/// destination.
///
/// # Panics
///
/// Panics if `v` has fewer than three elements.
#[inline]
pub fn mul3x3_vec_in_place(m: &Raw3, v: &mut [f64]) {
    let tmp = mul3x3_vec(m, &[v[0], v[1], v[2]]);
    v[..3].copy_from_slice(&tmp);
}

/// `a · b`, returning a new matrix.
#[inline]
pub fn mul3x3_mat(a: &Raw3, b: &Raw3) -> Raw3 {
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
        }
    }
    out
}

/// `b ← a · b`.
///
/// The product is accumulated in temporary storage, so `b` may also have
/// been the source of `a` (e.g. squaring a copy of itself).
#[inline]
pub fn mul3x3_mat_assign_left(a: &Raw3, b: &mut Raw3) {
    let tmp = mul3x3_mat(a, b);
    *b = tmp;
}

/// General `rows×inner` · `inner×cols` multiply on row-major slices.
///
/// Used for device matrices whose channel count is not three (gray, CMYK
/// style devices).
///
/// # Panics
///
/// Panics if any slice length does not match the given dimensions.
///
/// ```rust
/// use huepath_math::kernel::mul_general;
///
/// // 3x1 column times 1x1 scalar
/// let a = [0.9642, 1.0, 0.8249];
/// let b = [0.5];
/// let mut out = [0.0; 3];
/// mul_general(&a, &b, &mut out, 3, 1, 1);
/// assert_eq!(out[1], 0.5);
/// ```
pub fn mul_general(a: &[f64], b: &[f64], out: &mut [f64], rows: usize, inner: usize, cols: usize) {
    assert_eq!(a.len(), rows * inner, "left operand must be rows x inner");
    assert_eq!(b.len(), inner * cols, "right operand must be inner x cols");
    assert_eq!(out.len(), rows * cols, "output must be rows x cols");

    for i in 0..rows {
        for j in 0..cols {
            let mut sum = 0.0;
            for k in 0..inner {
                sum += a[i * inner + k] * b[k * cols + j];
            }
            out[i * cols + j] = sum;
        }
    }
}
