//! esp-design: single-pass ESP sizing.
//!
//! [`compute_design`] turns a [`DesignInput`] and a pump curve into a
//! [`DesignResult`]: fluid properties, production rates at surface and at the
//! intake, a head breakdown, the stage count, horsepower and electrical
//! loading. The pump-intake pressure refinement runs exactly once; there is
//! no convergence loop.
//!
//! Equipment-dependent formulas (pump series accessories, cable drop and
//! resistance) live in [`equipment`] as lookup tables keyed by small enums.
//! [`chart`] samples the pump and system curves for display.

pub mod chart;
pub mod engine;
pub mod equipment;
pub mod error;
pub mod input;
pub mod result;

pub use chart::{ChartPoint, PerformanceChart, performance_chart};
pub use engine::{FRICTION_FT_PER_KFT, UNSEPARATED_GAS_FRACTION, compute_design};
pub use equipment::{CableClass, CableSpec, CurrentBasis, PumpSeries};
pub use error::DesignError;
pub use input::DesignInput;
pub use result::{
    DesignBasis, DesignResult, Electrical, FluidProperties, HeadBreakdown, Horsepower,
    ProductionRates, ResultSection,
};
