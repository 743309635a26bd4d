//! Pump/system curve samples for the performance chart.

use esp_curve::PumpCurveModel;
use serde::Serialize;

use crate::result::DesignResult;

/// Samples across `[0, max dataset flow]`.
pub const CHART_SAMPLES: usize = 100;

/// System curve friction exponent.
const FRICTION_EXPONENT: f64 = 1.85;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ChartPoint {
    pub flow: f64,
    pub head: f64,
}

/// Performance chart series for a pump of `stages` stages.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PerformanceChart {
    pub stages: u32,
    pub flows: Vec<f64>,
    /// PCHIP head per stage clamped at zero, times `stages`.
    pub pump_head: Vec<f64>,
    pub system_head: Vec<f64>,
    /// Spline head at the BEP flow, times `stages`.
    pub bep: ChartPoint,
    pub design_point: ChartPoint,
    pub rec_min: f64,
    pub rec_max: f64,
}

/// Build the chart for `stages` stages, defaulting to the design count.
pub fn performance_chart(
    design: &DesignResult,
    curve: &PumpCurveModel,
    stages: Option<u32>,
) -> PerformanceChart {
    let stages = stages.unwrap_or(design.stage_count);
    let (flows, pump_head) = pump_curve_series(curve, stages);
    let system_head = flows.iter().map(|&q| system_head(design, q)).collect();
    PerformanceChart {
        stages,
        flows,
        pump_head,
        system_head,
        bep: bep_point(design, curve, stages),
        design_point: ChartPoint {
            flow: design.basis.target_rate,
            head: design.tdh,
        },
        rec_min: design.basis.rec_min,
        rec_max: design.basis.rec_max,
    }
}

/// Multi-stage pump curve over [`CHART_SAMPLES`] flows.
pub fn pump_curve_series(curve: &PumpCurveModel, stages: u32) -> (Vec<f64>, Vec<f64>) {
    let n = f64::from(stages);
    curve
        .sampled_head_curve(CHART_SAMPLES)
        .into_iter()
        .map(|(q, h)| (q, h * n))
        .unzip()
}

/// BEP marker for a pump of `stages` stages.
pub fn bep_point(design: &DesignResult, curve: &PumpCurveModel, stages: u32) -> ChartPoint {
    let flow = design.basis.bep_flow;
    ChartPoint {
        flow,
        head: curve.head_at(flow) * f64::from(stages),
    }
}

/// Head the well demands at `flow`: lift plus surface head, with friction
/// scaled from its design-rate value by `(flow/target)^1.85`.
pub fn system_head(design: &DesignResult, flow: f64) -> f64 {
    let static_head = design.heads.h_lift + design.heads.h_surf;
    if flow == 0.0 {
        return static_head;
    }
    let basis = &design.basis;
    let friction = basis.friction_factor
        * (basis.pump_setting_depth_md / 1000.0)
        * (flow / basis.target_rate).powf(FRICTION_EXPONENT);
    static_head + friction
}
