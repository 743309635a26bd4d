//! Two-column pump curve CSV.
//!
//! ```text
//! # ESP-3000 catalog curve
//! flow_bpd,head_ft
//! 48.86,40.27
//! 111.21,40.51
//! ```
//!
//! Blank lines and `#` comments are skipped. A first row whose leading cell
//! is not a number is taken as a header. Extra columns are ignored.

use std::path::Path;

use esp_curve::PumpCurveDataset;

use crate::ProjectResult;
use crate::validate::ValidationError;

pub fn read_curve_csv(path: &Path) -> ProjectResult<PumpCurveDataset> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_curve_csv(&content)?)
}

pub fn parse_curve_csv(content: &str) -> Result<PumpCurveDataset, ValidationError> {
    let mut flows = Vec::new();
    let mut heads = Vec::new();
    let mut first_row = true;

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut cells = line.split(',').map(str::trim);
        let flow_cell = cells.next().unwrap_or_default();
        let head_cell = cells.next();

        let is_header = first_row && flow_cell.parse::<f64>().is_err();
        first_row = false;
        if is_header {
            continue;
        }

        let line_no = index + 1;
        let Some(head_cell) = head_cell else {
            return Err(ValidationError::CurveCsv {
                line: line_no,
                reason: "expected flow and head columns".to_string(),
            });
        };
        flows.push(parse_cell(flow_cell, "flow", line_no)?);
        heads.push(parse_cell(head_cell, "head", line_no)?);
    }

    Ok(PumpCurveDataset::new(flows, heads)?)
}

fn parse_cell(cell: &str, what: &str, line: usize) -> Result<f64, ValidationError> {
    cell.parse::<f64>().map_err(|_| ValidationError::CurveCsv {
        line,
        reason: format!("{what} {cell:?} is not a number"),
    })
}
