//! Error types for the esp-app service layer.

use std::path::PathBuf;

use esp_core::EspError;

/// Application error shared by every frontend.
///
/// Engine failures keep their [`EspError`] so the kind stays visible.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Failed to read case file: {path}")]
    CaseFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Engine(EspError),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Stable kind name, matching [`EspError::kind`] for engine failures.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Engine(e) => e.kind(),
            AppError::Project(_) | AppError::CaseFileRead { .. } => "ProjectError",
            AppError::Serialization(_) => "SerializationError",
            AppError::Io(_) => "IoError",
        }
    }
}

impl From<EspError> for AppError {
    fn from(err: EspError) -> Self {
        AppError::Engine(err)
    }
}

impl From<esp_curve::CurveError> for AppError {
    fn from(err: esp_curve::CurveError) -> Self {
        AppError::Engine(err.into())
    }
}

impl From<esp_design::DesignError> for AppError {
    fn from(err: esp_design::DesignError) -> Self {
        AppError::Engine(err.into())
    }
}

impl From<esp_monitor::MonitorError> for AppError {
    fn from(err: esp_monitor::MonitorError) -> Self {
        AppError::Engine(err.into())
    }
}

impl From<esp_project::ProjectError> for AppError {
    fn from(err: esp_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}
