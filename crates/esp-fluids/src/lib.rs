//! esp-fluids: empirical PVT correlations for ESP sizing.
//!
//! Provides:
//! - oil specific gravity from API gravity
//! - Standing solution gas-oil ratio and oil formation volume factor
//! - gas formation volume factor at a given pressure
//! - oil/water mixture formation volume factor and composite gravity
//!
//! Every function is a pure formula over explicit arguments. They fail only
//! on operations with no real answer (a zero divisor, a negative base under a
//! fractional exponent) and otherwise pass NaN/∞ through; physical
//! plausibility is the caller's concern.
//!
//! Water cut appears in two conventions across these formulas. The mixture
//! volume factor takes a percentage (`water_cut_pct`), the composite gravity
//! takes a fraction (`water_cut_fraction`). The names are part of the API on
//! purpose; converting at the call site is the caller's responsibility.

pub mod error;
pub mod mixture;
pub mod pvt;

pub use error::{FluidError, FluidResult};
pub use mixture::{composite_fluid_sg, oil_water_mix_fvf};
pub use pvt::{gas_fvf, oil_fvf, oil_specific_gravity, solution_gor};
