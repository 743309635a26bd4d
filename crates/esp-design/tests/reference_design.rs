mod common;

use common::{base_input, reference_curve};
use esp_core::{EspError, Tolerances, nearly_equal};
use esp_design::{CableClass, DesignError, PumpSeries, compute_design};

const TOL: Tolerances = Tolerances {
    abs: 1e-9,
    rel: 1e-8,
};

fn assert_close(name: &str, actual: f64, expected: f64) {
    assert!(
        nearly_equal(actual, expected, TOL),
        "{name}: got {actual}, expected {expected}"
    );
}

#[test]
fn fluid_properties_of_reference_well() {
    let design = compute_design(&base_input(), &reference_curve()).unwrap();
    let f = &design.fluids;
    assert_close("oil_sg", f.oil_sg, 0.8927444794952681);
    assert_close("flowing_bhp", f.flowing_bhp, 2200.0);
    assert_close("rs", f.rs, 292.7433586405509);
    assert_close("bo", f.bo, 1.2306495295747528);
    assert_close("bow", f.bow, 1.230603399668838);
    assert_close("fluid_sg", f.fluid_sg, 0.8927679305993691);
    assert_close("bg", f.bg, 8.270399251825683);
    assert_close("tubing_sg", f.tubing_composite_sg, 0.6435022726720839);
}

#[test]
fn production_rates_of_reference_well() {
    let design = compute_design(&base_input(), &reference_curve()).unwrap();
    let p = &design.production;
    assert_close("tdr", p.total_esp_downhole_rate, 984.4827197350703);
    assert_close("surface oil", p.surface_oil_rate, 784.0);
    assert_close("downhole oil", p.downhole_oil_rate, 964.8292311866062);
    assert_close("water", p.water_prod_downhole, 16.0);
    assert_close("total gas", p.total_prod_gas, 359.928);
    assert_close("gas in solution", p.gas_in_solution, 234.14784797505826);
    assert_close("free gas", p.free_gas_volume, 125.78015202494174);
    assert_close("gas downhole", p.gas_prod_downhole, 1040.252075201599);
    assert_close("fluid volume", p.total_fluid_volume, 2021.0813063882051);
    assert_close("free gas % intake", p.free_gas_pct_intake, 51.470075543897465);
    assert_close("gas not separated", p.gas_not_separated, 208.0504150403198);
    assert_close("fluid to pump", p.total_fluid_to_pump, 1188.879646226926);
    assert_close("free gas % first stage", p.free_gas_pct_first_stage, 17.499703666438947);
    assert_close("tubing gas", p.gas_vol_tubing, 259.3038783800466);
    assert_close("tubing GOR", p.tubing_gor, 330.7447428316921);
    assert_close("mass", p.total_mass_prod, 268054.02157782303);
}

#[test]
fn heads_and_stage_count_of_reference_well() {
    let design = compute_design(&base_input(), &reference_curve()).unwrap();
    let h = &design.heads;
    assert_close("initial pip", h.initial_pip, 2781.335);
    assert_close("initial lift", h.initial_lift, -1499.9341439720865);
    assert_close("initial surface", h.initial_surface_head, 1810.8044880535642);
    assert_close("friction", h.friction_head, 256.275);
    assert_close("initial tdh", h.initial_tdh, 567.1453440814778);
    assert_eq!(h.initial_stage_estimate, 14);
    assert_close("pip", h.pump_intake_pressure, 2004.782900455489);
    assert_close("ndl", h.net_dynamic_lift, 508.90018040308314);
    assert_close("fluid level", h.fluid_level_above_pump, 5186.099819596917);
    assert_eq!(h.h_lift, h.net_dynamic_lift);

    assert_close("head per stage", design.head_per_stage, 43.050346716710756);
    assert_close("tdh", design.tdh, 3021.1340048567727);
    assert_close("tdh sum", h.h_lift + h.h_surf, design.tdh);
    assert_eq!(design.stage_count, 71);
}

#[test]
fn power_and_electrical_of_reference_well() {
    let design = compute_design(&base_input(), &reference_curve()).unwrap();
    let hp = &design.horsepower;
    assert_close("startup hp", hp.required_hp_startup, 75.62266666666667);
    assert_close("bhp", hp.pump_bhp_normal, 42.764587032696014);
    assert_close("hhp", hp.hydraulic_hp, 19.55950732496683);

    let e = &design.electrical;
    assert_close("pumpup", e.pumpup_time, -16.214202887960273);
    assert_close("startup A", e.startup_ampere, 22.434724444444445);
    assert_close("normal A", e.normal_ampere, 12.686827486366484);
    assert_close("vd", e.voltage_drop, 34.24022456037828);
    assert_close("rsv", e.required_surface_voltage, 2159.2402245603785);
    assert_close("kva", e.total_system_kva, 332.4582173755615);
    assert_close("sea cable", e.sea_cable_ampere, 1.8262605487080499);
    assert_close("kw", e.true_power_kw, 223.41192207637732);
    assert_close("R", e.cable_resistance, 1.0129940246);
    assert_close("vdc", e.voltage_drop_cable, 22.259110513108734);
    assert_close("vstart", e.vstart, 2034.0950327769208);
    assert_close("vstart ratio", e.vstart_ratio, 0.9572211918950215);

    assert_eq!(design.basis.pump_series, PumpSeries::Od500);
    assert_eq!(design.basis.cable_class, CableClass::No1);
}

#[test]
fn lower_productivity_needs_more_stages() {
    let mut input = base_input();
    input.productivity_index = 0.4;
    let design = compute_design(&input, &reference_curve()).unwrap();
    assert_eq!(design.stage_count, 158);
    assert_close("tdh", design.tdh, 6780.9013075008515);
    assert_close("pip", design.heads.pump_intake_pressure, 804.782900455489);
    assert_close("tubing sg", design.fluids.tubing_composite_sg, 0.510337176531729);
}

#[test]
fn zero_productivity_index_is_a_domain_error() {
    let mut input = base_input();
    input.productivity_index = 0.0;
    let err = compute_design(&input, &reference_curve()).unwrap_err();
    let esp: EspError = err.into();
    assert_eq!(esp.kind(), "DomainError");
    assert!(esp.to_string().contains("drawdown"));
}

#[test]
fn zero_intake_pressure_is_a_domain_error() {
    let mut input = base_input();
    input.perf_start_depth_tvd = input.pump_setting_depth_tvd;
    input.static_pressure = 800.0;
    let err = compute_design(&input, &reference_curve()).unwrap_err();
    assert!(matches!(err, DesignError::Fluid(_)), "{err}");
    assert!(err.to_string().contains("gas FVF"));
}

#[test]
fn target_beyond_curve_has_no_stage_count() {
    let mut input = base_input();
    input.target_rate = 6000.0;
    input.static_pressure = 9000.0;
    let err = compute_design(&input, &reference_curve()).unwrap_err();
    assert!(matches!(err, DesignError::StageCount { which: "final", .. }), "{err}");
}

#[test]
fn zero_motor_hp_zeroes_currents() {
    let mut input = base_input();
    input.motor_hp_nameplate = 0.0;
    let design = compute_design(&input, &reference_curve()).unwrap();
    let e = &design.electrical;
    assert_eq!(e.startup_ampere, 0.0);
    assert_eq!(e.normal_ampere, 0.0);
    assert_eq!(e.sea_cable_ampere, 0.0);
    assert_eq!(e.vstart, input.motor_voltage_nameplate);
    assert_eq!(e.vstart_ratio, 1.0);
}

#[test]
fn zero_transformer_voltage_zeroes_sea_cable_current() {
    let mut input = base_input();
    input.transformer_voltage = 0.0;
    let design = compute_design(&input, &reference_curve()).unwrap();
    assert_eq!(design.electrical.sea_cable_ampere, 0.0);
    assert!(design.electrical.normal_ampere > 0.0);
}

#[test]
fn four_inch_series_uses_od400_accessories() {
    let mut input = base_input();
    input.pump_od = 4.0;
    input.num_rgs_od400 = 2;
    input.num_agh_od400 = 1;
    input.num_rgs_od500 = 5;
    let design = compute_design(&input, &reference_curve()).unwrap();
    assert_eq!(design.basis.pump_series, PumpSeries::Od400);
    let expected = 71.0 * 0.936 + 4.5 * 2.0 / 1.2 + 30.0;
    assert_close("startup hp", design.horsepower.required_hp_startup, expected);
}

#[test]
fn cable_two_drops_on_normal_current() {
    let mut input = base_input();
    input.cable_number = 2;
    let design = compute_design(&input, &reference_curve()).unwrap();
    let e = &design.electrical;
    let md_kft = 5.695;
    let expected_drop = (0.27423 * e.normal_ampere - 0.49627) * md_kft * (1.0 + 0.002 * 170.0);
    assert_close("vd", e.voltage_drop, expected_drop);
    assert_close("R", e.cable_resistance, md_kft * 0.169 * (1.0 + 0.00214 * 153.0));
}

#[test]
fn sections_expose_every_quantity() {
    let design = compute_design(&base_input(), &reference_curve()).unwrap();
    let sections = design.sections();
    let titles: Vec<_> = sections.iter().map(|s| s.title).collect();
    assert_eq!(
        titles,
        [
            "Design Point",
            "Fluid Properties",
            "Production",
            "Pressures & Heads",
            "Horsepower",
            "Electrical"
        ]
    );
    assert_eq!(design.quantity("stage_count"), Some(71.0));
    assert_eq!(design.quantity("tdh"), Some(design.tdh));
    assert_eq!(design.quantity("vstart_ratio"), Some(design.electrical.vstart_ratio));
    assert_eq!(design.quantity("nope"), None);
}

#[test]
fn result_serializes_to_json() {
    let design = compute_design(&base_input(), &reference_curve()).unwrap();
    let json = serde_json::to_value(&design).unwrap();
    assert_eq!(json["stage_count"], 71);
    assert_eq!(json["basis"]["pump_series"], "Od500");
    assert!(json["electrical"]["true_power_kw"].as_f64().unwrap() > 0.0);
}
