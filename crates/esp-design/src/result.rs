//! Design result record.

use serde::Serialize;

use crate::equipment::{CableClass, PumpSeries};

/// Targets the design was sized against, carried for monitoring and charts.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DesignBasis {
    pub target_rate: f64,
    pub bep_flow: f64,
    pub rec_min: f64,
    pub rec_max: f64,
    pub pump_setting_depth_md: f64,
    /// Friction loss (ft per 1000 ft of MD).
    pub friction_factor: f64,
    pub pump_series: PumpSeries,
    pub cable_class: CableClass,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FluidProperties {
    pub oil_sg: f64,
    pub flowing_bhp: f64,
    pub rs: f64,
    pub bo: f64,
    /// Gas FVF at the refined pump-intake pressure.
    pub bg: f64,
    pub bow: f64,
    /// Liquid-only composite gravity.
    pub fluid_sg: f64,
    /// Mass-balance gravity of the mixture inside the tubing.
    pub tubing_composite_sg: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductionRates {
    pub total_esp_downhole_rate: f64,
    pub surface_oil_rate: f64,
    pub downhole_oil_rate: f64,
    pub water_prod_downhole: f64,
    pub total_prod_gas: f64,
    pub gas_in_solution: f64,
    pub free_gas_volume: f64,
    pub gas_prod_downhole: f64,
    pub total_fluid_volume: f64,
    pub free_gas_pct_intake: f64,
    pub gas_not_separated: f64,
    pub total_fluid_to_pump: f64,
    pub free_gas_pct_first_stage: f64,
    pub gas_vol_tubing: f64,
    pub tubing_gor: f64,
    pub total_mass_prod: f64,
}

/// Provisional and final head terms.
///
/// The provisional pass uses a hydrostatic intake pressure and the liquid
/// gravity. The final TDH is net dynamic lift plus surface head at the
/// tubing gravity; friction is reported but not added.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeadBreakdown {
    pub initial_pip: f64,
    pub initial_lift: f64,
    pub initial_surface_head: f64,
    pub friction_head: f64,
    pub initial_tdh: f64,
    pub initial_stage_estimate: i64,
    pub pump_intake_pressure: f64,
    pub net_dynamic_lift: f64,
    pub fluid_level_above_pump: f64,
    pub h_lift: f64,
    pub h_surf: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Horsepower {
    pub required_hp_startup: f64,
    pub pump_bhp_normal: f64,
    pub hydraulic_hp: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Electrical {
    /// Minutes to fill the tubing without a check valve.
    pub pumpup_time: f64,
    pub startup_ampere: f64,
    pub normal_ampere: f64,
    pub voltage_drop: f64,
    pub required_surface_voltage: f64,
    pub total_system_kva: f64,
    pub sea_cable_ampere: f64,
    pub true_power_kw: f64,
    pub cable_resistance: f64,
    pub voltage_drop_cable: f64,
    pub vstart: f64,
    pub vstart_ratio: f64,
}

/// Output of [`compute_design`](crate::compute_design). Immutable once built.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DesignResult {
    pub basis: DesignBasis,
    pub fluids: FluidProperties,
    pub production: ProductionRates,
    pub heads: HeadBreakdown,
    pub horsepower: Horsepower,
    pub electrical: Electrical,
    pub stage_count: u32,
    /// Spline head per stage at the target rate (ft).
    pub head_per_stage: f64,
    /// Total dynamic head (ft).
    pub tdh: f64,
}

/// A titled group of named quantities, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSection {
    pub title: &'static str,
    pub entries: Vec<(&'static str, f64)>,
}

impl ResultSection {
    fn new(title: &'static str, entries: Vec<(&'static str, f64)>) -> Self {
        Self { title, entries }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|&(_, v)| v)
    }
}

impl DesignResult {
    /// Named view of every derived quantity, grouped for reporting.
    pub fn sections(&self) -> Vec<ResultSection> {
        let f = &self.fluids;
        let p = &self.production;
        let h = &self.heads;
        let hp = &self.horsepower;
        let e = &self.electrical;
        vec![
            ResultSection::new(
                "Design Point",
                vec![
                    ("stage_count", f64::from(self.stage_count)),
                    ("head_per_stage", self.head_per_stage),
                    ("tdh", self.tdh),
                ],
            ),
            ResultSection::new(
                "Fluid Properties",
                vec![
                    ("oil_sg", f.oil_sg),
                    ("flowing_bhp", f.flowing_bhp),
                    ("rs", f.rs),
                    ("bo", f.bo),
                    ("bg", f.bg),
                    ("bow", f.bow),
                    ("fluid_sg", f.fluid_sg),
                    ("tubing_composite_sg", f.tubing_composite_sg),
                ],
            ),
            ResultSection::new(
                "Production",
                vec![
                    ("total_esp_downhole_rate", p.total_esp_downhole_rate),
                    ("surface_oil_rate", p.surface_oil_rate),
                    ("downhole_oil_rate", p.downhole_oil_rate),
                    ("water_prod_downhole", p.water_prod_downhole),
                    ("total_prod_gas", p.total_prod_gas),
                    ("gas_in_solution", p.gas_in_solution),
                    ("free_gas_volume", p.free_gas_volume),
                    ("gas_prod_downhole", p.gas_prod_downhole),
                    ("total_fluid_volume", p.total_fluid_volume),
                    ("free_gas_pct_intake", p.free_gas_pct_intake),
                    ("gas_not_separated", p.gas_not_separated),
                    ("total_fluid_to_pump", p.total_fluid_to_pump),
                    ("free_gas_pct_first_stage", p.free_gas_pct_first_stage),
                    ("gas_vol_tubing", p.gas_vol_tubing),
                    ("tubing_gor", p.tubing_gor),
                    ("total_mass_prod", p.total_mass_prod),
                ],
            ),
            ResultSection::new(
                "Pressures & Heads",
                vec![
                    ("initial_pip", h.initial_pip),
                    ("initial_lift", h.initial_lift),
                    ("initial_surface_head", h.initial_surface_head),
                    ("friction_head", h.friction_head),
                    ("initial_tdh", h.initial_tdh),
                    ("initial_stage_estimate", h.initial_stage_estimate as f64),
                    ("pump_intake_pressure", h.pump_intake_pressure),
                    ("net_dynamic_lift", h.net_dynamic_lift),
                    ("fluid_level_above_pump", h.fluid_level_above_pump),
                    ("h_lift", h.h_lift),
                    ("h_surf", h.h_surf),
                ],
            ),
            ResultSection::new(
                "Horsepower",
                vec![
                    ("required_hp_startup", hp.required_hp_startup),
                    ("pump_bhp_normal", hp.pump_bhp_normal),
                    ("hydraulic_hp", hp.hydraulic_hp),
                ],
            ),
            ResultSection::new(
                "Electrical",
                vec![
                    ("pumpup_time", e.pumpup_time),
                    ("startup_ampere", e.startup_ampere),
                    ("normal_ampere", e.normal_ampere),
                    ("voltage_drop", e.voltage_drop),
                    ("required_surface_voltage", e.required_surface_voltage),
                    ("total_system_kva", e.total_system_kva),
                    ("sea_cable_ampere", e.sea_cable_ampere),
                    ("true_power_kw", e.true_power_kw),
                    ("cable_resistance", e.cable_resistance),
                    ("voltage_drop_cable", e.voltage_drop_cable),
                    ("vstart", e.vstart),
                    ("vstart_ratio", e.vstart_ratio),
                ],
            ),
        ]
    }

    /// Look up a derived quantity by name across all sections.
    pub fn quantity(&self, name: &str) -> Option<f64> {
        self.sections().iter().find_map(|s| s.get(name))
    }
}
