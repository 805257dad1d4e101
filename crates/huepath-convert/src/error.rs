//! Conversion error types.

use huepath_core::{ColorType, CoreError};
use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors raised while resolving or running a conversion.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConvertError {
    /// Invalid input, rejected before anything is computed.
    #[error("invalid argument: {0}")]
    Argument(String),

    /// A color failed validation.
    #[error(transparent)]
    Color(#[from] CoreError),

    /// No registered path covers a required plain-chain hop.
    #[error("no conversion path registered for {from} -> {to}")]
    NotFound {
        /// Source type of the missing hop
        from: ColorType,
        /// Target type of the missing hop
        to: ColorType,
    },

    /// The configured chromatic adaptation method is not registered.
    #[error("chromatic adaptation method '{0}' is not registered")]
    AdaptationNotFound(String),

    /// An internal invariant was violated. Indicates a bug, never retried.
    #[error("internal configuration error: {0}")]
    Configuration(String),

    /// The converter was disposed.
    #[error("converter has been disposed")]
    Disposed,
}
