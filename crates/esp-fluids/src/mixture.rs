//! Oil/water mixture properties.

/// Mixture formation volume factor Bow.
///
/// `water_cut_pct` is read as a percentage (0–100).
pub fn oil_water_mix_fvf(water_cut_pct: f64, bo: f64) -> f64 {
    water_cut_pct / 100.0 + (1.0 - water_cut_pct / 100.0) * bo
}

/// Composite liquid specific gravity, gas ignored.
///
/// `water_cut_fraction` is read as a fraction (0–1).
pub fn composite_fluid_sg(oil_sg: f64, water_sg: f64, water_cut_fraction: f64) -> f64 {
    oil_sg * (1.0 - water_cut_fraction) + water_sg * water_cut_fraction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_fvf_endpoints() {
        assert_eq!(oil_water_mix_fvf(0.0, 1.2), 1.2);
        assert_eq!(oil_water_mix_fvf(100.0, 1.2), 1.0);
    }

    #[test]
    fn composite_sg_endpoints() {
        assert_eq!(composite_fluid_sg(0.85, 1.01, 0.0), 0.85);
        assert_eq!(composite_fluid_sg(0.85, 1.01, 1.0), 1.01);
    }

    #[test]
    fn conventions_are_not_interchangeable() {
        // The same number read in the two conventions gives different answers.
        let bo = 1.2306495295747528;
        let as_pct = oil_water_mix_fvf(0.02, bo);
        let as_fraction_scaled = oil_water_mix_fvf(2.0, bo);
        assert!((as_pct - 1.230603399668838).abs() < 1e-12);
        assert!((as_pct - as_fraction_scaled).abs() > 1e-3);
    }
}
