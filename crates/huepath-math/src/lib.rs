//! # huepath-math
//!
//! Numeric kernel shared by the conversion compiler and the color
//! difference calculators.
//!
//! - [`Mat3`] - row-major 3x3 matrix in `f64`
//! - [`kernel`] - raw-array primitives: 3x3 inversion, in-place (alias-safe)
//!   3x3·3x1 and 3x3·3x3 products, general `a×b · b×c` multiply
//! - [`ChromaticAdaptationMethod`] - cone-response matrix pairs (Bradford,
//!   Von Kries, XYZ scaling) and the adaptation matrix between two whites
//!
//! # Convention
//!
//! Matrices are **row-major** and act on **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Numeric policy
//!
//! Nothing here guards against singular input. Inverting a singular matrix or
//! adapting from a white with a zero cone response yields NaN/Inf, which
//! propagates to the caller unchanged.
//!
//! # Usage
//!
//! ```rust
//! use huepath_math::{Mat3, BRADFORD};
//!
//! let d65 = [0.95047, 1.0, 1.08883];
//! let d50 = [0.96422, 1.0, 0.82521];
//!
//! let m = BRADFORD.calculate_matrix(d65, d50);
//! let white = m.mul_vec(d65);
//! assert!((white[2] - d50[2]).abs() < 1e-6);
//! # let _ = Mat3::IDENTITY;
//! ```
//!
//! # Used By
//!
//! - `huepath-core` - RGB primary matrices
//! - `huepath-icc` - device matrices
//! - `huepath-convert` - adaptation and fused matrix stages

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
pub mod kernel;
mod mat3;

pub use adapt::*;
pub use mat3::*;
