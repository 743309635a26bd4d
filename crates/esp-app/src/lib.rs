//! Shared application service layer for espflow.
//!
//! Frontends go through this crate: it opens case files, holds the pump
//! curve and the computed design for one well, refuses live updates until a
//! design exists, and renders results as text, JSON and CSV.

pub mod error;
pub mod project_service;
pub mod report;
pub mod session;

pub use error::{AppError, AppResult};
pub use project_service::{OpenedCase, load_case, open_case, save_case};
pub use report::{chart_csv, curve_table, design_json, design_report, live_report};
pub use session::{LiveUpdate, WellSession};
