//! Fluid property errors.

use esp_core::EspError;
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur during fluid property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// The formula has no real value for these arguments.
    #[error("{correlation}: {what}")]
    Undefined {
        correlation: &'static str,
        what: String,
    },
}

impl FluidError {
    pub(crate) fn wrap(correlation: &'static str) -> impl Fn(EspError) -> FluidError {
        move |err| FluidError::Undefined {
            correlation,
            what: err.to_string(),
        }
    }
}

impl From<FluidError> for EspError {
    fn from(err: FluidError) -> Self {
        EspError::Domain {
            what: err.to_string(),
        }
    }
}
