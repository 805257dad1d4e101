//! Profile error types.

use huepath_core::ColorType;
use thiserror::Error;

/// Result type for profile operations.
pub type IccResult<T> = Result<T, IccError>;

/// Errors raised while building device profiles.
#[derive(Debug, Error)]
pub enum IccError {
    /// Failed to load a profile from a file or memory.
    #[error("failed to load profile: {0}")]
    LoadFailed(String),

    /// Failed to create a profile or its transforms.
    #[error("failed to create profile: {0}")]
    CreateFailed(String),

    /// The profile's colorspace cannot be handled.
    #[error("unsupported {role} colorspace {actual}")]
    Unsupported {
        /// `data` or `pcs`
        role: &'static str,
        /// What the profile declares
        actual: String,
    },

    /// A PCS other than XYZ or Lab was requested.
    #[error("{0} is not a profile connection space")]
    NotPcs(ColorType),

    /// The device matrix has a non-finite entry.
    #[error("device matrix of '{0}' is singular or not finite")]
    Singular(String),
}
