//! Text, JSON and CSV renderings shared by the frontends.

use esp_curve::PumpCurveModel;
use esp_design::{DesignResult, PerformanceChart};
use esp_monitor::OperatingStatus;

use crate::error::AppResult;
use crate::session::LiveUpdate;

/// Every derived design quantity, grouped by section.
pub fn design_report(design: &DesignResult) -> String {
    let mut out = format!(
        "Design: {} stages, {:.2} ft/stage, TDH {:.2} ft\n",
        design.stage_count, design.head_per_stage, design.tdh
    );
    for section in design.sections() {
        out.push_str(&format!("\n{}:\n", section.title));
        for (name, value) in &section.entries {
            out.push_str(&format!("  {:<28} {:>14.4}\n", name, value));
        }
    }
    out
}

pub fn design_json(design: &DesignResult) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(design)?)
}

/// Live point, both classifications and their recommendations.
pub fn live_report(update: &LiveUpdate) -> String {
    let p = &update.point;
    let a = &update.assessment;
    let mut out = format!(
        "Live point at {}\n",
        p.timestamp.format("%Y-%m-%d %H:%M:%S")
    );
    out.push_str(&format!("  Flow:              {:.1} bpd\n", p.flow));
    out.push_str(&format!("  Total head:        {:.1} ft\n", p.total_head));
    out.push_str(&format!("  Head per stage:    {:.3} ft\n", p.head_per_stage));
    out.push_str(&format!("  Operating stages:  {}\n", p.operating_stages));
    out.push_str(&format!(
        "  Design deviation:  {:+.1} bpd ({:+.1}%)\n",
        p.deviation_from_design, p.deviation_from_design_pct
    ));
    out.push_str(&format!(
        "  BEP deviation:     {:+.1}%\n",
        p.deviation_from_bep_pct
    ));

    out.push_str(&format!("\nStatus: {}\n", a.status.headline()));
    match a.status {
        OperatingStatus::Optimal => {}
        OperatingStatus::OutOfRange(deviation) => {
            out.push_str(&format!("  {:?}\n", deviation));
        }
    }
    for rec in a.status.recommendations() {
        out.push_str(&format!("  - {}\n", rec));
    }
    out.push_str(&format!(
        "BEP band: {} ({})\n",
        a.bep_band.code(),
        a.bep_band.summary()
    ));
    for rec in a.bep_band.recommendations() {
        out.push_str(&format!("  - {}\n", rec));
    }

    let m = &a.metrics;
    out.push_str("\nMetrics:\n");
    out.push_str(&format!(
        "  Relative efficiency:  {:.1}%\n",
        m.relative_efficiency_pct
    ));
    out.push_str(&format!(
        "  Capacity utilization: {:.1}%\n",
        m.capacity_utilization_pct
    ));
    out.push_str(&format!("  Head margin:          {:+.1}%\n", m.head_margin_pct));
    out
}

/// Chart series as CSV, one row per sampled flow.
pub fn chart_csv(chart: &PerformanceChart) -> String {
    let mut csv = String::from("flow_bpd,pump_head_ft,system_head_ft\n");
    for ((q, pump), system) in chart
        .flows
        .iter()
        .zip(&chart.pump_head)
        .zip(&chart.system_head)
    {
        csv.push_str(&format!("{},{},{}\n", q, pump, system));
    }
    csv
}

/// Spline and PCHIP head per stage at each flow.
pub fn curve_table(curve: &PumpCurveModel, flows: &[f64]) -> String {
    let pchip = curve.head_curve(flows);
    let mut out = String::from("flow_bpd,spline_head_ft,pchip_head_ft\n");
    for (q, shape) in flows.iter().zip(pchip) {
        out.push_str(&format!("{},{},{}\n", q, curve.head_at(*q), shape));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use esp_curve::reference_dataset;

    fn reference_curve() -> PumpCurveModel {
        PumpCurveModel::new(reference_dataset().unwrap()).unwrap()
    }

    #[test]
    fn curve_table_has_header_and_one_row_per_flow() {
        let table = curve_table(&reference_curve(), &[0.0, 1000.0, 2000.0]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "flow_bpd,spline_head_ft,pchip_head_ft");
        assert!(lines[2].starts_with("1000,"));
    }

    #[test]
    fn curve_table_matches_data_points() {
        let curve = reference_curve();
        let q = curve.dataset().flows()[10];
        let h = curve.dataset().heads()[10];
        let table = curve_table(&curve, &[q]);
        let row = table.lines().nth(1).unwrap();
        let cols: Vec<f64> = row.split(',').map(|c| c.parse().unwrap()).collect();
        assert!((cols[1] - h).abs() < 1e-9);
        assert!((cols[2] - h).abs() < 1e-9);
    }
}
