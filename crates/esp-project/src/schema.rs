//! Case file schema.

use std::path::PathBuf;

use esp_design::DesignInput;
use esp_monitor::SensorReading;
use serde::{Deserialize, Serialize};

use crate::validate::ValidationError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseFile {
    pub version: u32,
    pub well: WellDef,
    #[serde(default)]
    pub pump_curve: PumpCurveDef,
    pub design: DesignDef,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sensor_readings: Vec<SensorReadingDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WellDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pump_model: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum PumpCurveDef {
    /// Built-in ESP-3000 reference curve.
    #[default]
    Reference,
    Points {
        flow: Vec<f64>,
        head: Vec<f64>,
    },
    /// Two-column flow/head CSV, relative to the case file.
    Csv { path: PathBuf },
}

/// Design block as written: every field optional so that missing ones can be
/// listed together.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DesignDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bep_flow: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rec_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rec_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bhp_per_stage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perf_start_depth_md: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perf_start_depth_tvd: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pump_setting_depth_tvd: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pump_setting_depth_md: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tubing_id: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_cut: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wellhead_pressure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_pressure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_hole_temp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_sg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oil_api: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_sg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bubble_point_pressure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_compressibility: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub productivity_index: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pump_od: Option<f64>,
    /// Accessory counts default to zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_rgs_od400: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_rgs_od500: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_agh_od400: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_agh_od500: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cable_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motor_hp_nameplate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motor_voltage_nameplate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motor_ampere_nameplate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motor_frequency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transformer_voltage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motor_power_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motor_efficiency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pump_efficiency: Option<f64>,
}

/// Collects the labels of absent required fields while a record is built.
struct Required {
    missing: Vec<&'static str>,
}

impl Required {
    fn real(&mut self, value: Option<f64>, label: &'static str) -> f64 {
        value.unwrap_or_else(|| {
            self.missing.push(label);
            f64::NAN
        })
    }

    fn count(&mut self, value: Option<u32>, label: &'static str) -> u32 {
        value.unwrap_or_else(|| {
            self.missing.push(label);
            0
        })
    }
}

impl DesignDef {
    /// Labels of the required fields that are absent, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        match self.to_input() {
            Err(ValidationError::MissingFields { labels }) => labels,
            _ => Vec::new(),
        }
    }

    /// Build a complete [`DesignInput`]; a partial record is rejected.
    ///
    /// # Errors
    /// Returns [`ValidationError::MissingFields`] naming every absent field.
    pub fn to_input(&self) -> Result<DesignInput, ValidationError> {
        let mut req = Required {
            missing: Vec::new(),
        };
        let input = DesignInput {
            bep_flow: req.real(self.bep_flow, "BEP Flow Rate"),
            rec_min: req.real(self.rec_min, "Recommended Min Flow"),
            rec_max: req.real(self.rec_max, "Recommended Max Flow"),
            bhp_per_stage: req.real(self.bhp_per_stage, "BHP per Stage"),
            perf_start_depth_md: req.real(self.perf_start_depth_md, "Perforation Start Depth (MD)"),
            perf_start_depth_tvd: req.real(
                self.perf_start_depth_tvd,
                "Perforation Start Depth (TVD)",
            ),
            pump_setting_depth_tvd: req.real(
                self.pump_setting_depth_tvd,
                "Pump Setting Depth (TVD)",
            ),
            pump_setting_depth_md: req.real(self.pump_setting_depth_md, "Pump Setting Depth (MD)"),
            tubing_id: req.real(self.tubing_id, "Tubing ID"),
            target_rate: req.real(self.target_rate, "Target Rate"),
            water_cut: req.real(self.water_cut, "Water Cut"),
            wellhead_pressure: req.real(self.wellhead_pressure, "Wellhead Pressure"),
            static_pressure: req.real(self.static_pressure, "Static Pressure"),
            bottom_hole_temp: req.real(self.bottom_hole_temp, "Bottom Hole Temperature"),
            water_sg: req.real(self.water_sg, "Water Specific Gravity"),
            oil_api: req.real(self.oil_api, "Oil API Gravity"),
            gas_sg: req.real(self.gas_sg, "Gas Specific Gravity"),
            bubble_point_pressure: req.real(self.bubble_point_pressure, "Bubble Point Pressure"),
            gas_compressibility: req.real(self.gas_compressibility, "Gas Compressibility"),
            gor: req.real(self.gor, "GOR"),
            productivity_index: req.real(self.productivity_index, "Productivity Index"),
            pump_od: req.real(self.pump_od, "Pump OD"),
            num_rgs_od400: self.num_rgs_od400.unwrap_or(0),
            num_rgs_od500: self.num_rgs_od500.unwrap_or(0),
            num_agh_od400: self.num_agh_od400.unwrap_or(0),
            num_agh_od500: self.num_agh_od500.unwrap_or(0),
            cable_number: req.count(self.cable_number, "Cable Number"),
            motor_hp_nameplate: req.real(self.motor_hp_nameplate, "Motor HP"),
            motor_voltage_nameplate: req.real(self.motor_voltage_nameplate, "Motor Voltage"),
            motor_ampere_nameplate: req.real(self.motor_ampere_nameplate, "Motor Ampere"),
            motor_frequency: req.real(self.motor_frequency, "Motor Frequency"),
            transformer_voltage: req.real(self.transformer_voltage, "Transformer Voltage"),
            motor_power_factor: req.real(self.motor_power_factor, "Motor Power Factor"),
            motor_efficiency: req.real(self.motor_efficiency, "Motor Efficiency"),
            pump_efficiency: req.real(self.pump_efficiency, "Pump Efficiency"),
        };
        if req.missing.is_empty() {
            Ok(input)
        } else {
            Err(ValidationError::MissingFields {
                labels: req.missing,
            })
        }
    }
}

impl From<&DesignInput> for DesignDef {
    fn from(input: &DesignInput) -> Self {
        Self {
            bep_flow: Some(input.bep_flow),
            rec_min: Some(input.rec_min),
            rec_max: Some(input.rec_max),
            bhp_per_stage: Some(input.bhp_per_stage),
            perf_start_depth_md: Some(input.perf_start_depth_md),
            perf_start_depth_tvd: Some(input.perf_start_depth_tvd),
            pump_setting_depth_tvd: Some(input.pump_setting_depth_tvd),
            pump_setting_depth_md: Some(input.pump_setting_depth_md),
            tubing_id: Some(input.tubing_id),
            target_rate: Some(input.target_rate),
            water_cut: Some(input.water_cut),
            wellhead_pressure: Some(input.wellhead_pressure),
            static_pressure: Some(input.static_pressure),
            bottom_hole_temp: Some(input.bottom_hole_temp),
            water_sg: Some(input.water_sg),
            oil_api: Some(input.oil_api),
            gas_sg: Some(input.gas_sg),
            bubble_point_pressure: Some(input.bubble_point_pressure),
            gas_compressibility: Some(input.gas_compressibility),
            gor: Some(input.gor),
            productivity_index: Some(input.productivity_index),
            pump_od: Some(input.pump_od),
            num_rgs_od400: Some(input.num_rgs_od400),
            num_rgs_od500: Some(input.num_rgs_od500),
            num_agh_od400: Some(input.num_agh_od400),
            num_agh_od500: Some(input.num_agh_od500),
            cable_number: Some(input.cable_number),
            motor_hp_nameplate: Some(input.motor_hp_nameplate),
            motor_voltage_nameplate: Some(input.motor_voltage_nameplate),
            motor_ampere_nameplate: Some(input.motor_ampere_nameplate),
            motor_frequency: Some(input.motor_frequency),
            transformer_voltage: Some(input.transformer_voltage),
            motor_power_factor: Some(input.motor_power_factor),
            motor_efficiency: Some(input.motor_efficiency),
            pump_efficiency: Some(input.pump_efficiency),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorReadingDef {
    pub pump_intake_pressure: f64,
    pub pump_discharge_pressure: f64,
    pub tubing_fluid_gradient: f64,
    /// Defaults to the design stage count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_stages: Option<u32>,
}

impl SensorReadingDef {
    pub fn to_reading(&self, design_stages: u32) -> SensorReading {
        SensorReading::new(
            self.pump_intake_pressure,
            self.pump_discharge_pressure,
            self.tubing_fluid_gradient,
            self.operating_stages.unwrap_or(design_stages),
        )
    }
}
