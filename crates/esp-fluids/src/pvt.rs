//! Black-oil correlations (Standing).

use esp_core::{checked_div, checked_powf, units};

use crate::error::{FluidError, FluidResult};

/// Oil specific gravity from API gravity: `141.5 / (131.5 + API)`.
pub fn oil_specific_gravity(api_gravity: f64) -> FluidResult<f64> {
    checked_div(141.5, 131.5 + api_gravity, "oil specific gravity")
        .map_err(FluidError::wrap("oil specific gravity"))
}

/// Solution gas-oil ratio Rs (scf/stb), Standing correlation.
///
/// `temperature_f` in °F, `bubble_point_pressure` in psi.
pub fn solution_gor(
    gas_sg: f64,
    bubble_point_pressure: f64,
    oil_sg: f64,
    temperature_f: f64,
) -> FluidResult<f64> {
    let wrap = FluidError::wrap("solution GOR");
    let api = checked_div(141.5, oil_sg, "API from oil gravity").map_err(&wrap)? - 131.5;
    let base = (bubble_point_pressure / 18.0)
        * (10f64.powf(0.0125 * api) / 10f64.powf(0.00091 * temperature_f));
    let rs = checked_powf(base, 1.2048, "Standing Rs").map_err(&wrap)?;
    Ok(gas_sg * rs)
}

/// Oil formation volume factor Bo (bbl/stb), Standing correlation.
pub fn oil_fvf(rs: f64, gas_sg: f64, oil_sg: f64, temperature_f: f64) -> FluidResult<f64> {
    let wrap = FluidError::wrap("oil FVF");
    let gravity_ratio = checked_div(gas_sg, oil_sg, "gas/oil gravity ratio").map_err(&wrap)?;
    let correlating = rs * checked_powf(gravity_ratio, 0.5, "gravity ratio root").map_err(&wrap)?
        + 1.25 * temperature_f;
    let term = checked_powf(correlating, 1.175, "Standing Bo").map_err(&wrap)?;
    Ok(0.972 + 0.000147 * term)
}

/// Gas formation volume factor Bg (bbl/mcf) at `pressure` (psi).
///
/// A zero pressure has no answer and is rejected. A negative pressure is
/// passed through and yields a negative Bg.
pub fn gas_fvf(gas_compressibility: f64, temperature_f: f64, pressure: f64) -> FluidResult<f64> {
    checked_div(
        28.27 * gas_compressibility * units::rankine(temperature_f),
        pressure,
        "Bg",
    )
    .map_err(FluidError::wrap("gas FVF"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs().max(1.0)
    }

    #[test]
    fn oil_sg_from_api() {
        assert!(close(oil_specific_gravity(27.0).unwrap(), 0.8927444794952681, 1e-12));
        assert!(close(oil_specific_gravity(10.0).unwrap(), 1.0, 1e-12));
    }

    #[test]
    fn oil_sg_rejects_pole() {
        assert!(oil_specific_gravity(-131.5).is_err());
    }

    #[test]
    fn standing_rs_and_bo() {
        let oil_sg = oil_specific_gravity(27.0).unwrap();
        let rs = solution_gor(0.88, 1661.0, oil_sg, 230.0).unwrap();
        assert!(close(rs, 292.7433586405509, 1e-9), "rs={rs}");
        let bo = oil_fvf(rs, 0.88, oil_sg, 230.0).unwrap();
        assert!(close(bo, 1.2306495295747528, 1e-9), "bo={bo}");
    }

    #[test]
    fn negative_bubble_point_is_undefined() {
        let err = solution_gor(0.88, -100.0, 0.9, 230.0).unwrap_err();
        assert!(err.to_string().contains("solution GOR"));
    }

    #[test]
    fn zero_rs_still_has_bo() {
        let bo = oil_fvf(0.0, 0.88, 0.9, 60.0).unwrap();
        assert!(close(bo, 0.972 + 0.000147 * 75f64.powf(1.175), 1e-12));
    }

    #[test]
    fn bg_at_intake() {
        let bg = gas_fvf(0.85, 230.0, 2004.782900455489).unwrap();
        assert!(close(bg, 8.270399251825683, 1e-9), "bg={bg}");
    }

    #[test]
    fn bg_zero_pressure_fails_negative_passes() {
        assert!(gas_fvf(0.85, 230.0, 0.0).is_err());
        assert!(gas_fvf(0.85, 230.0, -100.0).unwrap() < 0.0);
    }
}
