//! esp-core: stable foundation for the ESP sizing and monitoring engine.
//!
//! Contains:
//! - units (oilfield conversion constants used by the correlations)
//! - numeric (Real + tolerances + guarded float helpers)
//! - error (shared error taxonomy)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{EspError, EspResult};
pub use numeric::*;
