//! Live update against a computed design.

use chrono::{DateTime, Local};
use esp_curve::PumpCurveModel;
use esp_design::DesignResult;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{MonitorError, MonitorResult};
use crate::metrics::PerformanceMetrics;
use crate::point::LiveOperatingPoint;
use crate::sensor::SensorReading;
use crate::status::{BepBand, OperatingStatus};

/// Reads the pump curve backwards for one design.
///
/// Borrows the design and curve; an update never changes either.
#[derive(Clone, Copy, Debug)]
pub struct LiveMonitor<'a> {
    design: &'a DesignResult,
    curve: &'a PumpCurveModel,
}

/// Everything derived from a live point.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Assessment {
    pub status: OperatingStatus,
    pub bep_band: BepBand,
    pub metrics: PerformanceMetrics,
}

impl<'a> LiveMonitor<'a> {
    pub fn new(design: &'a DesignResult, curve: &'a PumpCurveModel) -> Self {
        Self { design, curve }
    }

    pub fn design(&self) -> &'a DesignResult {
        self.design
    }

    /// Operating point for `reading`, stamped with the local time.
    pub fn update_operating_point(
        &self,
        reading: &SensorReading,
    ) -> MonitorResult<LiveOperatingPoint> {
        self.update_operating_point_at(reading, Local::now())
    }

    /// Operating point for `reading`, stamped with `timestamp`.
    ///
    /// Head per stage is the pressure rise over the gradient, split across
    /// the running stages; flow is the single-stage curve read at that head.
    ///
    /// # Errors
    /// Returns error if the reading is invalid (zero stages, zero or
    /// non-finite gradient) or the curve gives no finite flow for the head.
    pub fn update_operating_point_at(
        &self,
        reading: &SensorReading,
        timestamp: DateTime<Local>,
    ) -> MonitorResult<LiveOperatingPoint> {
        reading.validate()?;
        let head_all_stages = reading.delta_p() / reading.tubing_fluid_gradient;
        let head_per_stage = head_all_stages / f64::from(reading.operating_stages);
        let flow = self.curve.flow_at(head_per_stage);
        if !flow.is_finite() {
            return Err(MonitorError::NoFlowForHead { head_per_stage });
        }

        let point = LiveOperatingPoint::from_flow(
            &self.design.basis,
            flow,
            head_per_stage,
            reading.operating_stages,
            timestamp,
        )?;
        info!(
            flow = point.flow,
            total_head = point.total_head,
            head_per_stage,
            stages = reading.operating_stages,
            "live operating point"
        );
        Ok(point)
    }

    pub fn status(&self, point: &LiveOperatingPoint) -> OperatingStatus {
        let basis = &self.design.basis;
        OperatingStatus::classify(point.flow, basis.rec_min, basis.rec_max)
    }

    pub fn bep_band(&self, point: &LiveOperatingPoint) -> BepBand {
        BepBand::classify(point.deviation_from_bep_pct)
    }

    /// Both classifications plus the performance metrics.
    ///
    /// # Errors
    /// Returns error if a metric divides by zero.
    pub fn assess(&self, point: &LiveOperatingPoint) -> MonitorResult<Assessment> {
        let status = self.status(point);
        if !status.is_optimal() {
            warn!(
                flow = point.flow,
                rec_min = self.design.basis.rec_min,
                rec_max = self.design.basis.rec_max,
                "pump operating outside recommended range"
            );
        }
        Ok(Assessment {
            status,
            bep_band: self.bep_band(point),
            metrics: PerformanceMetrics::evaluate(point, self.design)?,
        })
    }
}

/// One-shot live update.
///
/// # Errors
/// See [`LiveMonitor::update_operating_point_at`].
pub fn update_operating_point(
    design: &DesignResult,
    curve: &PumpCurveModel,
    reading: &SensorReading,
) -> MonitorResult<LiveOperatingPoint> {
    LiveMonitor::new(design, curve).update_operating_point(reading)
}
