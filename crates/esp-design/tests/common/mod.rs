#![allow(dead_code)]

use esp_curve::{PumpCurveModel, reference_dataset};
use esp_design::DesignInput;

pub fn reference_curve() -> PumpCurveModel {
    PumpCurveModel::new(reference_dataset().unwrap()).unwrap()
}

/// NT3-style well on the reference ESP-3000 curve.
pub fn base_input() -> DesignInput {
    DesignInput {
        bep_flow: 2500.0,
        rec_min: 2000.0,
        rec_max: 3000.0,
        bhp_per_stage: 0.936,
        perf_start_depth_md: 6200.0,
        perf_start_depth_tvd: 6200.0,
        pump_setting_depth_md: 5695.0,
        pump_setting_depth_tvd: 5695.0,
        tubing_id: 3.958,
        target_rate: 800.0,
        water_cut: 0.02,
        wellhead_pressure: 700.0,
        static_pressure: 3000.0,
        bottom_hole_temp: 230.0,
        water_sg: 1.01,
        oil_api: 27.0,
        gas_sg: 0.88,
        bubble_point_pressure: 1661.0,
        gas_compressibility: 0.85,
        gor: 450.0,
        productivity_index: 1.0,
        pump_od: 5.0,
        num_rgs_od400: 0,
        num_rgs_od500: 1,
        num_agh_od400: 0,
        num_agh_od500: 0,
        cable_number: 1,
        motor_hp_nameplate: 300.0,
        motor_voltage_nameplate: 2125.0,
        motor_ampere_nameplate: 89.0,
        motor_frequency: 50.0,
        transformer_voltage: 15000.0,
        motor_power_factor: 0.84,
        motor_efficiency: 0.80,
        pump_efficiency: 0.56,
    }
}
