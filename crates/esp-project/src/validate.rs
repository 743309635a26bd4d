//! Case file validation.

use esp_curve::{CurveError, PumpCurveDataset};

use crate::schema::{CaseFile, PumpCurveDef};

pub const LATEST_VERSION: u32 = 1;

/// Missing fields named in a message before it is cut short.
const MISSING_SHOWN: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Please fill in all required fields. Missing: {}", summarize(.labels))]
    MissingFields { labels: Vec<&'static str> },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid pump curve: {0}")]
    Curve(#[from] CurveError),

    #[error("Pump curve CSV line {line}: {reason}")]
    CurveCsv { line: usize, reason: String },
}

fn summarize(labels: &[&'static str]) -> String {
    let shown = labels[..labels.len().min(MISSING_SHOWN)].join(", ");
    if labels.len() > MISSING_SHOWN {
        format!("{shown}...")
    } else {
        shown
    }
}

pub fn validate_case(case: &CaseFile) -> Result<(), ValidationError> {
    if case.version != LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    if case.well.name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "well.name".to_string(),
            value: format!("{:?}", case.well.name),
            reason: "well name is empty".to_string(),
        });
    }

    match &case.pump_curve {
        PumpCurveDef::Reference => {}
        PumpCurveDef::Points { flow, head } => {
            PumpCurveDataset::new(flow.clone(), head.clone())?;
        }
        PumpCurveDef::Csv { path } => {
            if path.as_os_str().is_empty() {
                return Err(ValidationError::InvalidValue {
                    field: "pump_curve.path".to_string(),
                    value: String::new(),
                    reason: "CSV path is empty".to_string(),
                });
            }
        }
    }

    let input = case.design.to_input()?;
    let values = serde_yaml::to_value(&input).map_err(|e| ValidationError::InvalidValue {
        field: "design".to_string(),
        value: String::new(),
        reason: e.to_string(),
    })?;
    if let serde_yaml::Value::Mapping(map) = values {
        for (key, value) in map {
            if let Some(v) = value.as_f64().filter(|v| !v.is_finite()) {
                return Err(ValidationError::InvalidValue {
                    field: format!("design.{}", key.as_str().unwrap_or("?")),
                    value: v.to_string(),
                    reason: "must be finite".to_string(),
                });
            }
        }
    }

    for (index, reading) in case.sensor_readings.iter().enumerate() {
        for (name, v) in [
            ("pump_intake_pressure", reading.pump_intake_pressure),
            ("pump_discharge_pressure", reading.pump_discharge_pressure),
            ("tubing_fluid_gradient", reading.tubing_fluid_gradient),
        ] {
            if !v.is_finite() {
                return Err(ValidationError::InvalidValue {
                    field: format!("sensor_readings[{index}].{name}"),
                    value: v.to_string(),
                    reason: "must be finite".to_string(),
                });
            }
        }
    }

    Ok(())
}
