//! Case file loading and saving.

use std::path::{Path, PathBuf};

use esp_curve::PumpCurveModel;
use esp_design::DesignInput;
use esp_monitor::SensorReading;
use esp_project::{CaseFile, resolve_curve};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::session::WellSession;

/// A validated case with its curve loaded into a fresh session.
#[derive(Debug, Clone)]
pub struct OpenedCase {
    pub case: CaseFile,
    pub input: DesignInput,
    pub session: WellSession,
    /// Directory the case file lives in.
    pub base_dir: PathBuf,
}

impl OpenedCase {
    /// Stored sensor readings; an omitted stage count means the design count.
    pub fn readings(&self, design_stages: u32) -> Vec<SensorReading> {
        self.case
            .sensor_readings
            .iter()
            .map(|r| r.to_reading(design_stages))
            .collect()
    }
}

/// Load and validate a case file.
pub fn load_case(path: &Path) -> AppResult<CaseFile> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::CaseFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(esp_project::load_yaml_str(&content)?)
}

/// Save a case file after validating it.
pub fn save_case(path: &Path, case: &CaseFile) -> AppResult<()> {
    Ok(esp_project::save_yaml(path, case)?)
}

/// Load a case, resolve its pump curve and open a session for the well.
///
/// No design is computed yet.
pub fn open_case(path: &Path) -> AppResult<OpenedCase> {
    let case = load_case(path)?;
    let base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let dataset = resolve_curve(&case, &base_dir)?;
    let curve = PumpCurveModel::new(dataset)?;
    let input = case
        .design
        .to_input()
        .map_err(|e| AppError::Project(e.to_string()))?;
    info!(
        well = %case.well.name,
        curve_points = curve.dataset().len(),
        readings = case.sensor_readings.len(),
        "case opened"
    );
    let session = WellSession::new(case.well.name.clone(), curve);
    Ok(OpenedCase {
        case,
        input,
        session,
        base_dir,
    })
}
