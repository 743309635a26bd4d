//! esp-monitor: live operating point of an installed ESP.
//!
//! A [`SensorReading`] (intake and discharge pressure, tubing gradient,
//! running stages) is turned into a [`LiveOperatingPoint`] by reading the
//! pump curve backwards, then compared against the design it was sized for.
//!
//! Two independent views classify a point: [`OperatingStatus`] against the
//! recommended flow window and [`BepBand`] against the best-efficiency flow.
//! Neither is an error; an out-of-range pump is reported, not rejected.

pub mod chart;
pub mod error;
pub mod metrics;
pub mod monitor;
pub mod point;
pub mod sensor;
pub mod status;

pub use chart::{LiveChart, live_chart};
pub use error::{MonitorError, MonitorResult};
pub use metrics::PerformanceMetrics;
pub use monitor::{Assessment, LiveMonitor, update_operating_point};
pub use point::LiveOperatingPoint;
pub use sensor::SensorReading;
pub use status::{BepBand, FlowDeviation, OperatingStatus};
