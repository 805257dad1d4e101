//! Chromatic adaptation between reference whites.
//!
//! A method is a cone-response matrix `MA` together with its inverse `MA1`.
//! The adaptation matrix between two whites is
//!
//! ```text
//! S = MA · src_white
//! D = MA · dst_white
//! M = MA1 · diag(D0/S0, D1/S1, D2/S2) · MA
//! ```
//!
//! # Built-in methods
//!
//! - [`BRADFORD`] - sharpened cone response, used unless told otherwise
//! - [`VON_KRIES`] - Hunt-Pointer-Estevez cone response
//! - [`XYZ_SCALING`] - Plain scaling of XYZ
//!
//! # Usage
//!
//! ```rust
//! use huepath_math::VON_KRIES;
//!
//! let d65 = [0.95047, 1.0, 1.08883];
//! let same = VON_KRIES.calculate_matrix(d65, d65);
//! assert!(same.is_identity(1e-9));
//! ```

use crate::Mat3;
use std::borrow::Cow;

/// Bradford cone-response matrix.
///
/// # Reference
///
/// Lam, K.M. (1985). Metamerism and Colour Constancy.
pub const BRADFORD_MA: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Von Kries (Hunt-Pointer-Estevez) cone-response matrix.
pub const VON_KRIES_MA: Mat3 = Mat3::from_rows([
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.00000, 0.00000, 0.91822],
]);

/// Bradford method.
pub const BRADFORD: ChromaticAdaptationMethod = ChromaticAdaptationMethod::from_static(
    "Bradford",
    BRADFORD_MA,
    Mat3::from_rows([
        [0.9869929054667123, -0.14705425642099013, 0.15996265166373125],
        [0.4323052697233945, 0.5183602715367776, 0.0492912282128556],
        [-0.008528664575177328, 0.04004282165408487, 0.9684866957875502],
    ]),
);

/// Von Kries method.
pub const VON_KRIES: ChromaticAdaptationMethod = ChromaticAdaptationMethod::from_static(
    "VonKries",
    VON_KRIES_MA,
    Mat3::from_rows([
        [1.8599363874558397, -1.1293816185800916, 0.21989740959619328],
        [0.3611914362417676, 0.6388124632850422, -0.000006370596838650885],
        [0.0, 0.0, 1.0890636230968613],
    ]),
);

/// XYZ scaling method: `MA` is the identity.
pub const XYZ_SCALING: ChromaticAdaptationMethod =
    ChromaticAdaptationMethod::from_static("XyzScaling", Mat3::IDENTITY, Mat3::IDENTITY);

/// A named chromatic adaptation method.
///
/// Stateless: every call to [`calculate_matrix`](Self::calculate_matrix)
/// produces a fresh matrix. Two methods are equal when name and matrices are
/// equal.
#[derive(Debug, Clone, PartialEq)]
pub struct ChromaticAdaptationMethod {
    name: Cow<'static, str>,
    ma: Mat3,
    ma_inv: Mat3,
}

impl ChromaticAdaptationMethod {
    /// Creates a method from its cone-response matrix; the inverse is
    /// computed here.
    pub fn new(name: impl Into<Cow<'static, str>>, ma: Mat3) -> Self {
        Self {
            name: name.into(),
            ma,
            ma_inv: ma.inverse(),
        }
    }

    /// Creates a method from a matrix pair known at compile time.
    pub const fn from_static(name: &'static str, ma: Mat3, ma_inv: Mat3) -> Self {
        Self {
            name: Cow::Borrowed(name),
            ma,
            ma_inv,
        }
    }

    /// Method name, used as the registry key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cone-response matrix `MA`.
    pub fn ma(&self) -> &Mat3 {
        &self.ma
    }

    /// Inverse cone-response matrix `MA1`.
    pub fn ma_inv(&self) -> &Mat3 {
        &self.ma_inv
    }

    /// Computes the matrix adapting XYZ values from `src_white` to
    /// `dst_white` (both as XYZ tristimulus).
    ///
    /// A zero cone response of the source white is a caller precondition
    /// violation; it is not checked and shows up as NaN/Inf in the result.
    pub fn calculate_matrix(&self, src_white: [f64; 3], dst_white: [f64; 3]) -> Mat3 {
        let s = self.ma.mul_vec(src_white);
        let d = self.ma.mul_vec(dst_white);
        let scale = Mat3::diagonal(d[0] / s[0], d[1] / s[1], d[2] / s[2]);
        self.ma_inv.mul_mat(&scale).mul_mat(&self.ma)
    }
}
