use std::path::Path;

use esp_curve::reference_dataset;
use esp_project::{PumpCurveDef, load_yaml, resolve_curve};

fn cases_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../cases")
}

#[test]
fn shipped_cases_load_and_validate() {
    for name in ["nt3.yaml", "nt3_csv_curve.yaml"] {
        let path = cases_dir().join(name);
        let case = load_yaml(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", name, e));
        case.design
            .to_input()
            .unwrap_or_else(|e| panic!("Incomplete design in {}: {}", name, e));
        resolve_curve(&case, &cases_dir())
            .unwrap_or_else(|e| panic!("Bad curve in {}: {}", name, e));
    }
}

#[test]
fn csv_curve_matches_reference() {
    let case = load_yaml(&cases_dir().join("nt3_csv_curve.yaml")).unwrap();
    assert!(matches!(case.pump_curve, PumpCurveDef::Csv { .. }));
    let from_csv = resolve_curve(&case, &cases_dir()).unwrap();
    assert_eq!(from_csv, reference_dataset().unwrap());
}

#[test]
fn readings_default_to_design_stages() {
    let case = load_yaml(&cases_dir().join("nt3.yaml")).unwrap();
    assert_eq!(case.sensor_readings.len(), 2);
    assert_eq!(case.sensor_readings[0].to_reading(158).operating_stages, 158);
    assert_eq!(case.sensor_readings[1].to_reading(158).operating_stages, 126);
    let input = case.design.to_input().unwrap();
    assert_eq!(input.num_rgs_od500, 1);
    assert_eq!(input.num_agh_od400, 0);
}
