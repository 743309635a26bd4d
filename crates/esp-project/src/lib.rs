//! esp-project: YAML case files for a single well.

pub mod curve_csv;
pub mod schema;
pub mod validate;

pub use curve_csv::{parse_curve_csv, read_curve_csv};
pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_case};

use std::path::Path;

use esp_core::EspError;
use esp_curve::{PumpCurveDataset, reference_dataset};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl From<ProjectError> for EspError {
    fn from(err: ProjectError) -> Self {
        EspError::InvalidArg {
            what: err.to_string(),
        }
    }
}

pub fn load_yaml(path: &Path) -> ProjectResult<CaseFile> {
    let content = std::fs::read_to_string(path)?;
    load_yaml_str(&content)
}

pub fn load_yaml_str(content: &str) -> ProjectResult<CaseFile> {
    let case: CaseFile = serde_yaml::from_str(content)?;
    validate_case(&case)?;
    Ok(case)
}

pub fn save_yaml(path: &Path, case: &CaseFile) -> ProjectResult<()> {
    validate_case(case)?;
    let content = serde_yaml::to_string(case)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load the pump curve a case refers to.
///
/// CSV paths are resolved against `base_dir`, normally the directory of the
/// case file.
pub fn resolve_curve(case: &CaseFile, base_dir: &Path) -> ProjectResult<PumpCurveDataset> {
    match &case.pump_curve {
        PumpCurveDef::Reference => Ok(reference_dataset().map_err(ValidationError::Curve)?),
        PumpCurveDef::Points { flow, head } => {
            Ok(PumpCurveDataset::new(flow.clone(), head.clone()).map_err(ValidationError::Curve)?)
        }
        PumpCurveDef::Csv { path } => read_curve_csv(&base_dir.join(path)),
    }
}
