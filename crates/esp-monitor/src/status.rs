//! Operating status classifications.

use serde::Serialize;

/// Which side of the recommended window the flow fell on, and by how much.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub enum FlowDeviation {
    TooLow { shortfall: f64 },
    TooHigh { excess: f64 },
}

/// Flow against the recommended operating window.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub enum OperatingStatus {
    Optimal,
    OutOfRange(FlowDeviation),
}

impl OperatingStatus {
    /// `Optimal` iff `rec_min <= flow <= rec_max`.
    pub fn classify(flow: f64, rec_min: f64, rec_max: f64) -> Self {
        if rec_min <= flow && flow <= rec_max {
            OperatingStatus::Optimal
        } else if flow < rec_min {
            OperatingStatus::OutOfRange(FlowDeviation::TooLow {
                shortfall: rec_min - flow,
            })
        } else {
            OperatingStatus::OutOfRange(FlowDeviation::TooHigh {
                excess: flow - rec_max,
            })
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            OperatingStatus::Optimal => "OPTIMAL",
            OperatingStatus::OutOfRange(_) => "OUT_OF_RANGE",
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            OperatingStatus::Optimal => "OPTIMAL OPERATION",
            OperatingStatus::OutOfRange(_) => "OUT OF RANGE",
        }
    }

    pub fn is_optimal(&self) -> bool {
        matches!(self, OperatingStatus::Optimal)
    }

    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            OperatingStatus::Optimal => &[],
            OperatingStatus::OutOfRange(FlowDeviation::TooLow { .. }) => &[
                "Check for pump wear",
                "Verify reservoir pressure",
                "Inspect for blockages",
            ],
            OperatingStatus::OutOfRange(FlowDeviation::TooHigh { .. }) => &[
                "Reduce pump speed if VSD equipped",
                "Check for gas slugging",
                "Verify stage count",
            ],
        }
    }
}

/// Distance from the best efficiency point, bucketed on |deviation %|.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum BepBand {
    /// ≤ 10 %
    NearBep,
    /// ≤ 20 %
    Moderate,
    /// > 20 %
    Severe,
}

impl BepBand {
    pub fn classify(deviation_from_bep_pct: f64) -> Self {
        let deviation = deviation_from_bep_pct.abs();
        if deviation <= 10.0 {
            BepBand::NearBep
        } else if deviation <= 20.0 {
            BepBand::Moderate
        } else {
            BepBand::Severe
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            BepBand::NearBep => "NEAR_BEP",
            BepBand::Moderate => "MODERATE",
            BepBand::Severe => "SEVERE",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            BepBand::NearBep => "System is operating at optimal efficiency",
            BepBand::Moderate => "Efficiency is acceptable but could be improved",
            BepBand::Severe => "Significant deviation from BEP",
        }
    }

    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            BepBand::NearBep | BepBand::Moderate => &[],
            BepBand::Severe => &[
                "Review operating parameters",
                "Consider pump resizing",
                "Check for component wear",
            ],
        }
    }
}
