//! Design input record.

use serde::{Deserialize, Serialize};

/// Every value a design computation reads, all required.
///
/// Units: flows in bpd, depths in ft, pressures in psi, temperature in °F,
/// tubing ID and pump OD in inches, motor data in HP / V / A / Hz.
///
/// `water_cut` is stored exactly as entered. The engine reads it in two
/// conventions (see [`compute_design`](crate::compute_design)).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DesignInput {
    // Pump performance targets
    pub bep_flow: f64,
    pub rec_min: f64,
    pub rec_max: f64,
    pub bhp_per_stage: f64,

    // Well geometry
    pub perf_start_depth_md: f64,
    pub perf_start_depth_tvd: f64,
    pub pump_setting_depth_md: f64,
    pub pump_setting_depth_tvd: f64,
    pub tubing_id: f64,

    // Production target
    pub target_rate: f64,
    pub water_cut: f64,

    // Pressures and temperature
    pub wellhead_pressure: f64,
    pub static_pressure: f64,
    pub bottom_hole_temp: f64,

    // Fluid PVT
    pub water_sg: f64,
    pub oil_api: f64,
    pub gas_sg: f64,
    pub bubble_point_pressure: f64,
    pub gas_compressibility: f64,
    pub gor: f64,
    pub productivity_index: f64,

    // Equipment
    pub pump_od: f64,
    pub num_rgs_od400: u32,
    pub num_rgs_od500: u32,
    pub num_agh_od400: u32,
    pub num_agh_od500: u32,
    pub cable_number: u32,

    // Electrical nameplate
    pub motor_hp_nameplate: f64,
    pub motor_voltage_nameplate: f64,
    pub motor_ampere_nameplate: f64,
    pub motor_frequency: f64,
    pub transformer_voltage: f64,
    pub motor_power_factor: f64,
    pub motor_efficiency: f64,
    pub pump_efficiency: f64,
}
