//! Equipment classes and their formula variants.
//!
//! Each class is a closed enum indexing a constant table, so every variant
//! can be checked on its own.

use serde::Serialize;

/// Pump series, selected by nominal outer diameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PumpSeries {
    /// 4-inch OD.
    Od400,
    /// Any other OD, sized with the 5-inch accessory loads.
    Od500,
}

/// Startup horsepower drawn by gas accessories of one series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccessoryLoads {
    /// Rotary gas separator HP before the 1.2 derate.
    pub separator_hp: f64,
    pub separator_derate: f64,
    /// Advanced gas handler HP.
    pub handler_hp: f64,
}

const ACCESSORY_TABLE: [AccessoryLoads; 2] = [
    AccessoryLoads {
        separator_hp: 4.5,
        separator_derate: 1.2,
        handler_hp: 30.0,
    },
    AccessoryLoads {
        separator_hp: 11.0,
        separator_derate: 1.2,
        handler_hp: 30.0,
    },
];

impl PumpSeries {
    pub fn from_od(pump_od: f64) -> Self {
        if pump_od == 4.0 {
            PumpSeries::Od400
        } else {
            PumpSeries::Od500
        }
    }

    pub fn accessories(self) -> &'static AccessoryLoads {
        &ACCESSORY_TABLE[self as usize]
    }
}

impl AccessoryLoads {
    /// Extra startup HP for `separators` RGS and `handlers` AGH units.
    pub fn startup_hp(&self, separators: u32, handlers: u32) -> f64 {
        self.separator_hp * f64::from(separators) / self.separator_derate
            + self.handler_hp * f64::from(handlers)
    }
}

/// Which motor current a cable drop correlation is driven by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CurrentBasis {
    Startup,
    Normal,
}

/// Power cable class, selected by cable number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CableClass {
    No1,
    No2,
    Other,
}

/// Empirical cable coefficients.
///
/// Voltage drop is `(slope·I − intercept)·MD/1000·(1 + 0.002·(T − 60))`.
/// Resistance is `MD·Ω_per_kft/1000·(1 + 0.00214·(T − 77))`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CableSpec {
    pub drop_slope: f64,
    pub drop_intercept: f64,
    pub drop_current: CurrentBasis,
    pub resistance_ohm_per_kft: f64,
}

const CABLE_TABLE: [CableSpec; 3] = [
    CableSpec {
        drop_slope: 0.22077,
        drop_intercept: 0.4661,
        drop_current: CurrentBasis::Startup,
        resistance_ohm_per_kft: 0.134,
    },
    CableSpec {
        drop_slope: 0.27423,
        drop_intercept: 0.49627,
        drop_current: CurrentBasis::Normal,
        resistance_ohm_per_kft: 0.169,
    },
    CableSpec {
        drop_slope: 0.27423,
        drop_intercept: 0.49627,
        drop_current: CurrentBasis::Normal,
        resistance_ohm_per_kft: 0.134,
    },
];

const DROP_TEMP_COEFF: f64 = 0.002;
const DROP_REF_TEMP_F: f64 = 60.0;
const RESISTANCE_TEMP_COEFF: f64 = 0.00214;
const RESISTANCE_REF_TEMP_F: f64 = 77.0;

impl CableClass {
    pub fn from_number(cable_number: u32) -> Self {
        match cable_number {
            1 => CableClass::No1,
            2 => CableClass::No2,
            _ => CableClass::Other,
        }
    }

    pub fn spec(self) -> &'static CableSpec {
        &CABLE_TABLE[self as usize]
    }
}

impl CableSpec {
    /// Voltage drop (V) along `depth_md` ft of cable at `temp_f`.
    pub fn voltage_drop(
        &self,
        startup_ampere: f64,
        normal_ampere: f64,
        depth_md: f64,
        temp_f: f64,
    ) -> f64 {
        let current = match self.drop_current {
            CurrentBasis::Startup => startup_ampere,
            CurrentBasis::Normal => normal_ampere,
        };
        ((self.drop_slope * current - self.drop_intercept) * depth_md / 1000.0)
            * ((temp_f - DROP_REF_TEMP_F) * DROP_TEMP_COEFF + 1.0)
    }

    /// Conductor resistance (Ω) of `depth_md` ft of cable at `temp_f`.
    pub fn resistance(&self, depth_md: f64, temp_f: f64) -> f64 {
        (depth_md * self.resistance_ohm_per_kft / 1000.0)
            * (1.0 + RESISTANCE_TEMP_COEFF * (temp_f - RESISTANCE_REF_TEMP_F))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esp_core::{Tolerances, nearly_equal};

    const TOL: Tolerances = Tolerances {
        abs: 1e-12,
        rel: 1e-12,
    };

    #[test]
    fn series_from_od() {
        assert_eq!(PumpSeries::from_od(4.0), PumpSeries::Od400);
        assert_eq!(PumpSeries::from_od(5.0), PumpSeries::Od500);
        assert_eq!(PumpSeries::from_od(5.38), PumpSeries::Od500);
    }

    #[test]
    fn accessory_hp_per_series() {
        let od400 = PumpSeries::Od400.accessories().startup_hp(2, 1);
        assert!(nearly_equal(od400, 4.5 * 2.0 / 1.2 + 30.0, TOL));
        let od500 = PumpSeries::Od500.accessories().startup_hp(1, 0);
        assert!(nearly_equal(od500, 11.0 / 1.2, TOL));
        assert_eq!(PumpSeries::Od500.accessories().startup_hp(0, 0), 0.0);
    }

    #[test]
    fn cable_class_from_number() {
        assert_eq!(CableClass::from_number(1), CableClass::No1);
        assert_eq!(CableClass::from_number(2), CableClass::No2);
        assert_eq!(CableClass::from_number(4), CableClass::Other);
        assert_eq!(CableClass::from_number(0), CableClass::Other);
    }

    #[test]
    fn cable_one_drops_on_startup_current() {
        let spec = CableClass::No1.spec();
        let drop = spec.voltage_drop(22.434724444444445, 12.686827486366484, 5695.0, 230.0);
        assert!(nearly_equal(drop, 34.24022456037828, Tolerances { abs: 1e-9, rel: 1e-9 }));
        // Normal current has no effect on cable 1.
        assert_eq!(drop, spec.voltage_drop(22.434724444444445, 0.0, 5695.0, 230.0));
    }

    #[test]
    fn other_cables_drop_on_normal_current() {
        for class in [CableClass::No2, CableClass::Other] {
            let spec = class.spec();
            let expected = (0.27423 * 10.0 - 0.49627) * 1.0 * (1.0 + 0.002 * 40.0);
            assert!(nearly_equal(spec.voltage_drop(99.0, 10.0, 1000.0, 100.0), expected, TOL));
        }
    }

    #[test]
    fn resistance_per_class() {
        let r1 = CableClass::No1.spec().resistance(5695.0, 230.0);
        assert!(nearly_equal(r1, 1.0129940246, Tolerances { abs: 1e-9, rel: 1e-9 }));
        let r2 = CableClass::No2.spec().resistance(1000.0, 77.0);
        assert!(nearly_equal(r2, 0.169, TOL));
        assert_eq!(
            CableClass::Other.spec().resistance(1000.0, 77.0),
            CableClass::No1.spec().resistance(1000.0, 77.0)
        );
    }
}
