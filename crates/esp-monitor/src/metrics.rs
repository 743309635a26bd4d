//! Performance metrics of a live point.

use esp_core::checked_div;
use esp_design::DesignResult;
use serde::Serialize;

use crate::error::MonitorResult;
use crate::point::LiveOperatingPoint;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PerformanceMetrics {
    /// Closeness to BEP flow, capped at 100 %.
    pub relative_efficiency_pct: f64,
    /// Live flow as a share of the design target.
    pub capacity_utilization_pct: f64,
    /// Live head above (+) or below (−) the design TDH.
    pub head_margin_pct: f64,
}

impl PerformanceMetrics {
    /// # Errors
    /// Returns error if the BEP flow, target rate, design TDH or (above BEP)
    /// the live flow is zero.
    pub fn evaluate(point: &LiveOperatingPoint, design: &DesignResult) -> MonitorResult<Self> {
        let flow = point.flow;
        let bep = design.basis.bep_flow;
        let relative_efficiency_pct = if flow < bep {
            (checked_div(flow, bep, "relative efficiency")? * 100.0).min(100.0)
        } else {
            (checked_div(bep, flow, "relative efficiency")? * 100.0).min(100.0)
        };
        let capacity_utilization_pct =
            checked_div(flow, design.basis.target_rate, "capacity utilization")? * 100.0;
        let head_margin_pct =
            checked_div(point.total_head - design.tdh, design.tdh, "head margin")? * 100.0;
        Ok(Self {
            relative_efficiency_pct,
            capacity_utilization_pct,
            head_margin_pct,
        })
    }
}
