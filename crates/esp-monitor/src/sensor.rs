//! Live sensor reading.

use serde::{Deserialize, Serialize};

use crate::error::{MonitorError, MonitorResult};

/// One set of downhole gauge values. Transient: built per update.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SensorReading {
    /// psi
    pub pump_intake_pressure: f64,
    /// psi
    pub pump_discharge_pressure: f64,
    /// psi/ft
    pub tubing_fluid_gradient: f64,
    pub operating_stages: u32,
}

impl SensorReading {
    pub fn new(
        pump_intake_pressure: f64,
        pump_discharge_pressure: f64,
        tubing_fluid_gradient: f64,
        operating_stages: u32,
    ) -> Self {
        Self {
            pump_intake_pressure,
            pump_discharge_pressure,
            tubing_fluid_gradient,
            operating_stages,
        }
    }

    /// Pressure added by the pump (psi).
    pub fn delta_p(&self) -> f64 {
        self.pump_discharge_pressure - self.pump_intake_pressure
    }

    /// Reject readings whose head cannot be computed.
    ///
    /// # Errors
    /// Returns error if a pressure or the gradient is non-finite, the
    /// gradient is zero, or no stages are running.
    pub fn validate(&self) -> MonitorResult<()> {
        for (what, value) in [
            ("pump intake pressure", self.pump_intake_pressure),
            ("pump discharge pressure", self.pump_discharge_pressure),
            ("tubing fluid gradient", self.tubing_fluid_gradient),
        ] {
            if !value.is_finite() {
                return Err(MonitorError::InvalidReading {
                    what: format!("{what} is {value}"),
                });
            }
        }
        if self.tubing_fluid_gradient == 0.0 {
            return Err(MonitorError::InvalidReading {
                what: "tubing fluid gradient is zero".into(),
            });
        }
        if self.operating_stages == 0 {
            return Err(MonitorError::InvalidReading {
                what: "operating stages is zero".into(),
            });
        }
        Ok(())
    }
}
