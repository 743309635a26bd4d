//! One well: its pump curve, its design and its latest live point.

use chrono::{DateTime, Local};
use esp_core::EspError;
use esp_curve::PumpCurveModel;
use esp_design::{DesignInput, DesignResult, PerformanceChart, compute_design, performance_chart};
use esp_monitor::{Assessment, LiveChart, LiveMonitor, LiveOperatingPoint, SensorReading, live_chart};
use tracing::info;

use crate::error::AppResult;

/// A live point together with its classifications.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveUpdate {
    pub point: LiveOperatingPoint,
    pub assessment: Assessment,
}

/// Session state for a single well.
///
/// A design must be computed before any live update may read it; a new
/// design discards the previous live point.
#[derive(Debug, Clone)]
pub struct WellSession {
    name: String,
    curve: PumpCurveModel,
    design: Option<DesignResult>,
    live: Option<LiveUpdate>,
}

impl WellSession {
    pub fn new(name: impl Into<String>, curve: PumpCurveModel) -> Self {
        Self {
            name: name.into(),
            curve,
            design: None,
            live: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn curve(&self) -> &PumpCurveModel {
        &self.curve
    }

    pub fn design(&self) -> Option<&DesignResult> {
        self.design.as_ref()
    }

    pub fn live(&self) -> Option<&LiveUpdate> {
        self.live.as_ref()
    }

    /// Size the pump and keep the result for monitoring.
    pub fn compute_design(&mut self, input: &DesignInput) -> AppResult<&DesignResult> {
        let design = compute_design(input, &self.curve)?;
        info!(well = %self.name, stages = design.stage_count, "design stored");
        self.live = None;
        Ok(self.design.insert(design))
    }

    fn require_design(&self) -> AppResult<&DesignResult> {
        self.design.as_ref().ok_or_else(|| {
            EspError::Precondition {
                what: format!(
                    "design must be computed before live monitoring of well {}",
                    self.name
                ),
            }
            .into()
        })
    }

    pub fn monitor(&self) -> AppResult<LiveMonitor<'_>> {
        Ok(LiveMonitor::new(self.require_design()?, &self.curve))
    }

    pub fn update_live(&mut self, reading: &SensorReading) -> AppResult<&LiveUpdate> {
        self.update_live_at(reading, Local::now())
    }

    pub fn update_live_at(
        &mut self,
        reading: &SensorReading,
        timestamp: DateTime<Local>,
    ) -> AppResult<&LiveUpdate> {
        let monitor = self.monitor()?;
        let point = monitor.update_operating_point_at(reading, timestamp)?;
        let assessment = monitor.assess(&point)?;
        Ok(self.live.insert(LiveUpdate { point, assessment }))
    }

    /// Chart at `stages` stages, or at the design count.
    pub fn performance_chart(&self, stages: Option<u32>) -> AppResult<PerformanceChart> {
        Ok(performance_chart(self.require_design()?, &self.curve, stages))
    }

    /// Chart of the latest live point.
    pub fn live_chart(&self) -> AppResult<LiveChart> {
        let design = self.require_design()?;
        let live = self.live.as_ref().ok_or_else(|| EspError::Precondition {
            what: "no live reading has been processed".to_string(),
        })?;
        Ok(live_chart(design, &self.curve, &live.point))
    }
}
