//! The sizing pass.

use esp_core::units::{
    AIR_DENSITY_LB_PER_FT3, BPD_TO_GPM, FRESH_WATER_GRADIENT_PSI_PER_FT, FT3_PER_BBL,
    HYDRAULIC_HP_DIVISOR, MINUTES_PER_DAY, SQRT3_CABLE, SQRT3_KVA, TUBING_CAPACITY_DIVISOR,
    WATER_DENSITY_LB_PER_FT3,
};
use esp_core::{EspError, checked_div, ratio_or_zero};
use esp_curve::PumpCurveModel;
use esp_fluids::{
    composite_fluid_sg, gas_fvf, oil_fvf, oil_specific_gravity, oil_water_mix_fvf, solution_gor,
};
use tracing::{debug, info, warn};

use crate::equipment::{CableClass, PumpSeries};
use crate::error::DesignError;
use crate::input::DesignInput;
use crate::result::{
    DesignBasis, DesignResult, Electrical, FluidProperties, HeadBreakdown, Horsepower,
    ProductionRates,
};

/// Fixed tubing friction loss (ft per 1000 ft of MD).
pub const FRICTION_FT_PER_KFT: f64 = 45.0;

/// Share of free intake gas that passes the separator (80% efficiency).
pub const UNSEPARATED_GAS_FRACTION: f64 = 0.2;

/// Motor terminal voltage sags by this multiple of startup current × R.
const STARTUP_SAG_FACTOR: f64 = 4.0;

/// Size a pump for `input` against the single-stage `curve`.
///
/// One deterministic pass: the pump-intake pressure is refined once from the
/// flowing bottom-hole pressure and never iterated.
///
/// `input.water_cut` is read in two conventions. Mixture FVF, liquid
/// gravity and the gas rates read it as a percentage; the surface oil/water
/// split reads it as a fraction. Both readings are kept as named locals.
///
/// Ratios guarded by a positive divisor (motor HP, transformer voltage,
/// fluid volumes, surface oil rate) fall back to zero. Any other zero
/// divisor is a [`DesignError`].
///
/// # Errors
/// Returns error on a zero divisor in an unguarded ratio, on an undefined
/// correlation, or when the head/stage ratio gives no positive stage count.
pub fn compute_design(
    input: &DesignInput,
    curve: &PumpCurveModel,
) -> Result<DesignResult, DesignError> {
    let water_cut_pct = input.water_cut;
    let water_cut_fraction = input.water_cut;
    let temp_f = input.bottom_hole_temp;
    let md = input.pump_setting_depth_md;

    // Fluid properties
    let oil_sg = oil_specific_gravity(input.oil_api)?;
    let flowing_bhp = input.static_pressure
        - checked_div(input.target_rate, input.productivity_index, "drawdown")?;
    let rs = solution_gor(input.gas_sg, input.bubble_point_pressure, oil_sg, temp_f)?;
    let bo = oil_fvf(rs, input.gas_sg, oil_sg, temp_f)?;
    let bow = oil_water_mix_fvf(water_cut_pct, bo);
    let total_esp_downhole_rate = input.target_rate * bow;
    let fluid_sg = composite_fluid_sg(oil_sg, input.water_sg, water_cut_pct / 100.0);

    // Surface and volumetric downhole rates
    let surface_oil_rate = (1.0 - water_cut_fraction) * input.target_rate;
    let downhole_oil_rate = surface_oil_rate * bo;
    let water_prod_downhole = water_cut_fraction * input.target_rate;
    let oil_share = 1.0 - water_cut_pct / 100.0;
    let total_prod_gas = oil_share * input.target_rate * input.gor / 1000.0;
    let gas_in_solution = oil_share * input.target_rate * rs / 1000.0;
    let free_gas_volume = total_prod_gas - gas_in_solution;

    // Provisional heads from a hydrostatic intake pressure
    let elevation = input.perf_start_depth_tvd - input.pump_setting_depth_tvd;
    let initial_pip = input.static_pressure - elevation * FRESH_WATER_GRADIENT_PSI_PER_FT;
    let initial_lift =
        input.pump_setting_depth_tvd - column_head(initial_pip, fluid_sg, "initial lift")?;
    let initial_surface_head =
        column_head(input.wellhead_pressure, fluid_sg, "initial surface head")?;
    let friction_head = FRICTION_FT_PER_KFT * (md / 1000.0);
    let initial_tdh = initial_lift + initial_surface_head + friction_head;

    let head_per_stage = curve.head_at(input.target_rate);
    let initial_stage_estimate = ceil_stages(initial_tdh, head_per_stage, "provisional")?;
    debug!(
        initial_pip,
        initial_tdh, head_per_stage, initial_stage_estimate, "provisional sizing"
    );

    // Refined intake conditions
    let pump_intake_pressure =
        flowing_bhp - elevation * fluid_sg * FRESH_WATER_GRADIENT_PSI_PER_FT;
    let bg = gas_fvf(input.gas_compressibility, temp_f, pump_intake_pressure)?;
    let gas_prod_downhole = free_gas_volume * bg;
    let total_fluid_volume = downhole_oil_rate + water_prod_downhole + gas_prod_downhole;
    let free_gas_pct_intake = guarded_ratio(
        gas_prod_downhole * 100.0,
        total_fluid_volume,
        "free gas at intake",
    );
    let gas_not_separated = gas_prod_downhole * UNSEPARATED_GAS_FRACTION;
    let total_fluid_to_pump = gas_not_separated + downhole_oil_rate + water_prod_downhole;
    let free_gas_pct_first_stage = guarded_ratio(
        gas_not_separated,
        total_fluid_to_pump,
        "free gas at first stage",
    ) * 100.0;
    let gas_vol_tubing = gas_in_solution + checked_div(gas_not_separated, bg, "tubing gas")?;
    let tubing_gor = guarded_ratio(gas_vol_tubing * 1000.0, surface_oil_rate, "tubing GOR");
    let total_mass_prod = (surface_oil_rate * oil_sg + water_prod_downhole * input.water_sg)
        * WATER_DENSITY_LB_PER_FT3
        * FT3_PER_BBL
        + tubing_gor * surface_oil_rate * input.gas_sg * AIR_DENSITY_LB_PER_FT3;
    let tubing_composite_sg = if total_fluid_to_pump > 0.0 {
        total_mass_prod / (total_fluid_to_pump * FT3_PER_BBL * WATER_DENSITY_LB_PER_FT3)
    } else {
        warn!(
            total_fluid_to_pump,
            "no fluid reaches the pump, tubing gravity falls back to liquid gravity"
        );
        fluid_sg
    };
    debug!(
        pump_intake_pressure,
        bg, free_gas_pct_intake, tubing_composite_sg, "intake conditions"
    );

    // Final heads
    let fluid_level_above_pump =
        column_head(pump_intake_pressure, fluid_sg, "fluid level above pump")?;
    let net_dynamic_lift = input.pump_setting_depth_tvd - fluid_level_above_pump;
    let h_surf = column_head(input.wellhead_pressure, tubing_composite_sg, "surface head")?;
    let tdh = net_dynamic_lift + h_surf;

    let estimate = ceil_stages(tdh, head_per_stage, "final")?;
    let stage_count = u32::try_from(estimate)
        .ok()
        .filter(|&n| n >= 1)
        .ok_or_else(|| DesignError::StageCount {
            which: "final",
            what: format!("TDH {tdh} ft over {head_per_stage} ft/stage gives {estimate} stages"),
        })?;
    debug!(tdh, stage_count, "final sizing");

    let series = PumpSeries::from_od(input.pump_od);
    let horsepower = horsepower(
        input,
        series,
        stage_count,
        tubing_composite_sg,
        total_esp_downhole_rate,
        tdh,
        fluid_sg,
    );

    let cable_class = CableClass::from_number(input.cable_number);
    let electrical = electrical(
        input,
        cable_class,
        &horsepower,
        initial_pip,
        total_esp_downhole_rate,
    );

    info!(
        stage_count,
        tdh,
        bhp = horsepower.pump_bhp_normal,
        kva = electrical.total_system_kva,
        "design complete"
    );

    Ok(DesignResult {
        basis: DesignBasis {
            target_rate: input.target_rate,
            bep_flow: input.bep_flow,
            rec_min: input.rec_min,
            rec_max: input.rec_max,
            pump_setting_depth_md: md,
            friction_factor: FRICTION_FT_PER_KFT,
            pump_series: series,
            cable_class,
        },
        fluids: FluidProperties {
            oil_sg,
            flowing_bhp,
            rs,
            bo,
            bg,
            bow,
            fluid_sg,
            tubing_composite_sg,
        },
        production: ProductionRates {
            total_esp_downhole_rate,
            surface_oil_rate,
            downhole_oil_rate,
            water_prod_downhole,
            total_prod_gas,
            gas_in_solution,
            free_gas_volume,
            gas_prod_downhole,
            total_fluid_volume,
            free_gas_pct_intake,
            gas_not_separated,
            total_fluid_to_pump,
            free_gas_pct_first_stage,
            gas_vol_tubing,
            tubing_gor,
            total_mass_prod,
        },
        heads: HeadBreakdown {
            initial_pip,
            initial_lift,
            initial_surface_head,
            friction_head,
            initial_tdh,
            initial_stage_estimate,
            pump_intake_pressure,
            net_dynamic_lift,
            fluid_level_above_pump,
            h_lift: net_dynamic_lift,
            h_surf,
        },
        horsepower,
        electrical,
        stage_count,
        head_per_stage,
        tdh,
    })
}

fn horsepower(
    input: &DesignInput,
    series: PumpSeries,
    stage_count: u32,
    tubing_composite_sg: f64,
    total_esp_downhole_rate: f64,
    tdh: f64,
    fluid_sg: f64,
) -> Horsepower {
    let stages = f64::from(stage_count);
    let (separators, handlers) = match series {
        PumpSeries::Od400 => (input.num_rgs_od400, input.num_agh_od400),
        PumpSeries::Od500 => (input.num_rgs_od500, input.num_agh_od500),
    };
    let required_hp_startup = stages * input.bhp_per_stage
        + series.accessories().startup_hp(separators, handlers);
    let pump_bhp_normal = input.bhp_per_stage * stages * tubing_composite_sg;
    let hydraulic_hp =
        total_esp_downhole_rate * BPD_TO_GPM * tdh * fluid_sg / HYDRAULIC_HP_DIVISOR;
    Horsepower {
        required_hp_startup,
        pump_bhp_normal,
        hydraulic_hp,
    }
}

fn electrical(
    input: &DesignInput,
    cable_class: CableClass,
    horsepower: &Horsepower,
    initial_pip: f64,
    total_esp_downhole_rate: f64,
) -> Electrical {
    let md = input.pump_setting_depth_md;
    let temp_f = input.bottom_hole_temp;
    let cable = cable_class.spec();

    let tubing_capacity = input.tubing_id.powi(2) / TUBING_CAPACITY_DIVISOR;
    let pumpup_time = if total_esp_downhole_rate > 0.0 {
        tubing_capacity * (md - initial_pip / FRESH_WATER_GRADIENT_PSI_PER_FT)
            / (total_esp_downhole_rate / MINUTES_PER_DAY)
    } else {
        warn!(total_esp_downhole_rate, "no downhole rate, pump-up time set to zero");
        0.0
    };

    let motor_a = input.motor_ampere_nameplate;
    let startup_ampere = guarded_ratio(
        motor_a * horsepower.required_hp_startup,
        input.motor_hp_nameplate,
        "startup ampere",
    );
    let normal_ampere = guarded_ratio(
        motor_a * horsepower.pump_bhp_normal,
        input.motor_hp_nameplate,
        "normal ampere",
    );

    let voltage_drop = cable.voltage_drop(startup_ampere, normal_ampere, md, temp_f);
    let required_surface_voltage = voltage_drop + input.motor_voltage_nameplate;
    let total_system_kva = required_surface_voltage * motor_a * SQRT3_KVA / 1000.0;
    let sea_cable_ampere = guarded_ratio(
        required_surface_voltage * normal_ampere,
        input.transformer_voltage,
        "sea cable ampere",
    );
    let true_power_kw = total_system_kva * input.motor_power_factor * input.motor_efficiency;

    let cable_resistance = cable.resistance(md, temp_f);
    let voltage_drop_cable = SQRT3_CABLE * cable_resistance * normal_ampere;
    let vstart =
        input.motor_voltage_nameplate - STARTUP_SAG_FACTOR * startup_ampere * cable_resistance;
    let vstart_ratio = guarded_ratio(vstart, input.motor_voltage_nameplate, "vstart ratio");

    Electrical {
        pumpup_time,
        startup_ampere,
        normal_ampere,
        voltage_drop,
        required_surface_voltage,
        total_system_kva,
        sea_cable_ampere,
        true_power_kw,
        cable_resistance,
        voltage_drop_cable,
        vstart,
        vstart_ratio,
    }
}

/// Head (ft) of a `pressure` column at gravity `sg`.
fn column_head(pressure: f64, sg: f64, what: &'static str) -> Result<f64, EspError> {
    checked_div(pressure, FRESH_WATER_GRADIENT_PSI_PER_FT * sg, what)
}

/// [`ratio_or_zero`] that reports the substitution.
fn guarded_ratio(num: f64, den: f64, what: &'static str) -> f64 {
    if den > 0.0 {
        num / den
    } else {
        warn!(den, "{what} undefined, reported as zero");
        ratio_or_zero(num, den)
    }
}

fn ceil_stages(tdh: f64, head_per_stage: f64, which: &'static str) -> Result<i64, DesignError> {
    let estimate = checked_div(tdh, head_per_stage, "stage estimate")?.ceil();
    if !estimate.is_finite() {
        return Err(DesignError::StageCount {
            which,
            what: format!("TDH {tdh} ft over {head_per_stage} ft/stage is not finite"),
        });
    }
    Ok(estimate as i64)
}
