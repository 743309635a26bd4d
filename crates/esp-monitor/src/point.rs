//! Live operating point.

use chrono::{DateTime, Local};
use esp_core::checked_div;
use esp_design::DesignBasis;
use serde::Serialize;

use crate::error::MonitorResult;

/// Where the pump is running right now, relative to its design.
///
/// Superseded by each update; nothing keeps a history.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LiveOperatingPoint {
    /// bpd
    pub flow: f64,
    /// ft, all running stages
    pub total_head: f64,
    pub head_per_stage: f64,
    pub operating_stages: u32,
    /// bpd above (+) or below (−) the design target
    pub deviation_from_design: f64,
    pub deviation_from_design_pct: f64,
    pub deviation_from_bep_pct: f64,
    pub timestamp: DateTime<Local>,
}

impl LiveOperatingPoint {
    /// Derive deviations for a known `flow` against the design `basis`.
    ///
    /// # Errors
    /// Returns error if the target rate or BEP flow is zero.
    pub fn from_flow(
        basis: &DesignBasis,
        flow: f64,
        head_per_stage: f64,
        operating_stages: u32,
        timestamp: DateTime<Local>,
    ) -> MonitorResult<Self> {
        let deviation_from_design = flow - basis.target_rate;
        let deviation_from_design_pct =
            checked_div(deviation_from_design, basis.target_rate, "deviation from design")? * 100.0;
        let deviation_from_bep_pct =
            checked_div(flow - basis.bep_flow, basis.bep_flow, "deviation from BEP")? * 100.0;
        Ok(Self {
            flow,
            total_head: head_per_stage * f64::from(operating_stages),
            head_per_stage,
            operating_stages,
            deviation_from_design,
            deviation_from_design_pct,
            deviation_from_bep_pct,
            timestamp,
        })
    }
}
