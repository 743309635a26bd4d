//! esp-curve: pump performance curve interpolation.
//!
//! Provides:
//! - `PumpCurveDataset`: validated (flow, head-per-stage) samples
//! - `PumpCurveModel`: the three lookups the engine needs
//!   - `head_at`: not-a-knot cubic spline, used for scalar design decisions
//!   - `head_curve`: shape-preserving PCHIP, used for plotted curves
//!   - `flow_at`: inverse linear lookup, used by live monitoring
//! - the built-in 51-point reference curve
//!
//! The spline and the PCHIP curve agree at the data points but can differ
//! slightly between them, most visibly near the head maximum. Design numbers
//! always come from the spline.

pub mod dataset;
pub mod error;
pub mod hermite;
pub mod inverse;
pub mod model;
pub mod pchip;
pub mod reference;
pub mod spline;

pub use dataset::{MIN_CURVE_POINTS, PumpCurveDataset};
pub use error::{CurveError, CurveResult};
pub use model::PumpCurveModel;
pub use reference::{REFERENCE_MODEL_NAME, reference_dataset};
