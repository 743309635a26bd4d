// esp-core/src/units.rs
//
// The engine works in a fixed oilfield unit set: bpd, ft, psi, °F, inch,
// HP, V, A and Ω. These are the conversion factors baked into the
// correlations; nothing else is converted.

/// Fresh-water pressure gradient (psi/ft).
pub const FRESH_WATER_GRADIENT_PSI_PER_FT: f64 = 0.433;

/// Cubic feet per barrel.
pub const FT3_PER_BBL: f64 = 5.615;

/// Fresh-water density (lb/ft³).
pub const WATER_DENSITY_LB_PER_FT3: f64 = 62.4;

/// Air density at standard conditions (lb/ft³).
pub const AIR_DENSITY_LB_PER_FT3: f64 = 0.0752;

/// Rankine offset for °F.
pub const RANKINE_OFFSET_F: f64 = 460.0;

/// Minutes per day.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Tubing capacity divisor: bbl/ft = ID(in)² / 1029.4.
pub const TUBING_CAPACITY_DIVISOR: f64 = 1029.4;

/// bpd·ft → hydraulic HP conversion pieces.
pub const BPD_TO_GPM: f64 = 0.02917;
pub const HYDRAULIC_HP_DIVISOR: f64 = 3960.0;

/// Three-phase factors as they appear in the sizing sheet.
pub const SQRT3_KVA: f64 = 1.73;
pub const SQRT3_CABLE: f64 = 1.732;

/// Convert a temperature (°F) to Rankine.
#[inline]
pub fn rankine(temp_f: f64) -> f64 {
    temp_f + RANKINE_OFFSET_F
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rankine_offset() {
        assert_eq!(rankine(230.0), 690.0);
    }
}
