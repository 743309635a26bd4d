//! Live performance chart series.

use esp_curve::PumpCurveModel;
use esp_design::DesignResult;
use esp_design::chart::{ChartPoint, bep_point, pump_curve_series};
use serde::Serialize;

use crate::point::LiveOperatingPoint;

/// Pump curve at the running stage count with design and live markers.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LiveChart {
    pub stages: u32,
    pub flows: Vec<f64>,
    pub pump_head: Vec<f64>,
    pub bep: ChartPoint,
    pub design_point: ChartPoint,
    pub live_point: ChartPoint,
    pub rec_min: f64,
    pub rec_max: f64,
}

pub fn live_chart(
    design: &DesignResult,
    curve: &PumpCurveModel,
    point: &LiveOperatingPoint,
) -> LiveChart {
    let stages = point.operating_stages;
    let (flows, pump_head) = pump_curve_series(curve, stages);
    LiveChart {
        stages,
        flows,
        pump_head,
        bep: bep_point(design, curve, stages),
        design_point: ChartPoint {
            flow: design.basis.target_rate,
            head: design.tdh,
        },
        live_point: ChartPoint {
            flow: point.flow,
            head: point.total_head,
        },
        rec_min: design.basis.rec_min,
        rec_max: design.basis.rec_max,
    }
}
