//! Live monitoring errors.

use esp_core::EspError;
use thiserror::Error;

pub type MonitorResult<T> = Result<T, MonitorError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MonitorError {
    /// A reading that cannot produce an operating point.
    #[error("Invalid sensor reading: {what}")]
    InvalidReading { what: String },

    /// The inverse curve lookup has no finite answer for this head.
    #[error("No finite flow on the pump curve for {head_per_stage} ft/stage")]
    NoFlowForHead { head_per_stage: f64 },

    #[error(transparent)]
    Numeric(#[from] EspError),
}

impl From<MonitorError> for EspError {
    fn from(err: MonitorError) -> Self {
        match err {
            MonitorError::InvalidReading { what } => EspError::InvalidSensorReading { what },
            MonitorError::NoFlowForHead { .. } => EspError::Domain {
                what: err.to_string(),
            },
            MonitorError::Numeric(e) => e,
        }
    }
}
