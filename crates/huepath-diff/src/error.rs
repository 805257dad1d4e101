//! Error types for the difference calculators.

use huepath_convert::ConvertError;
use huepath_core::{ColorType, CoreError};
use thiserror::Error;

/// Result type alias using [`DiffError`].
pub type DiffResult<T> = Result<T, DiffError>;

/// Errors raised when constructing a calculator.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DiffError {
    /// The formula is not defined for this color type.
    #[error("{formula} cannot compare {kind} colors")]
    Unsupported {
        /// Formula name
        formula: &'static str,
        /// Offending color type
        kind: ColorType,
    },

    /// The two colors belong to different representation families.
    #[error("cannot compare {first} with {second}")]
    FamilyMismatch {
        /// Type of the first color
        first: ColorType,
        /// Type of the second color
        second: ColorType,
    },

    /// Adapting an operand to the formula's reference white failed.
    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// Building a working color for the comparison failed.
    #[error(transparent)]
    Color(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_lab() -> DiffResult<huepath_core::Color> {
        let space = huepath_core::Colorspace::Cie(huepath_core::Whitepoint::D65);
        Ok(huepath_core::Color::new(ColorType::Lab, &[50.0, 0.0], space)?)
    }

    #[test]
    fn test_core_errors_propagate() {
        let err = short_lab().unwrap_err();
        assert_eq!(
            err,
            DiffError::Color(CoreError::ChannelCount {
                kind: ColorType::Lab,
                expected: 3,
                actual: 2,
            })
        );
    }
}
