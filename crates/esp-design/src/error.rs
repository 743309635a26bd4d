//! Design computation errors.

use esp_core::EspError;
use esp_fluids::FluidError;
use thiserror::Error;

/// Errors that can occur while sizing a pump.
///
/// The design result record is called `DesignResult`, so this crate spells
/// out `Result<T, DesignError>` instead of declaring an alias.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignError {
    #[error("Fluid correlation failed: {0}")]
    Fluid(#[from] FluidError),

    #[error(transparent)]
    Numeric(#[from] EspError),

    /// The head/stage ratio cannot be turned into a stage count.
    #[error("Cannot size {which} stage count: {what}")]
    StageCount { which: &'static str, what: String },
}

impl From<DesignError> for EspError {
    fn from(err: DesignError) -> Self {
        match err {
            DesignError::Fluid(e) => e.into(),
            DesignError::Numeric(e) => e,
            DesignError::StageCount { .. } => EspError::Domain {
                what: err.to_string(),
            },
        }
    }
}
