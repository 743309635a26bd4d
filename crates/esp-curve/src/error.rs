//! Pump curve errors.

use esp_core::EspError;
use thiserror::Error;

/// Result type for pump curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors that can occur while building or evaluating a pump curve.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Fewer samples than interpolation needs.
    #[error("pump curve needs at least {min} points, got {len}")]
    TooFewPoints { len: usize, min: usize },

    /// Flow and head columns of different length.
    #[error("flow and head columns differ in length ({flows} vs {heads})")]
    LengthMismatch { flows: usize, heads: usize },

    /// Flow samples must be strictly increasing.
    #[error("flow values must be strictly increasing (index {index})")]
    NonIncreasingFlow { index: usize },

    /// Value outside what a pump curve can contain.
    #[error("invalid {what} at index {index}: {value}")]
    InvalidValue {
        what: &'static str,
        index: usize,
        value: f64,
    },

    /// Spline system could not be solved.
    #[error("cubic spline system is singular")]
    SingularSpline,
}

impl From<CurveError> for EspError {
    fn from(err: CurveError) -> Self {
        EspError::Domain {
            what: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CurveError::TooFewPoints { len: 2, min: 3 };
        assert!(err.to_string().contains("at least 3"));
    }

    #[test]
    fn error_to_esp_error() {
        let err: EspError = CurveError::SingularSpline.into();
        assert_eq!(err.kind(), "DomainError");
    }
}
