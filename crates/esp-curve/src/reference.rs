//! Built-in reference pump curve (ESP-3000), offered as the fallback when no
//! custom curve is supplied.

use crate::dataset::PumpCurveDataset;
use crate::error::CurveResult;

pub const REFERENCE_MODEL_NAME: &str = "ESP-3000";

/// Flow (bpd).
pub const REFERENCE_FLOWS: [f64; 51] = [
    48.86, 111.21, 159.86, 201.57, 257.17, 305.83, 361.43, 433.98, 472.69, 528.24, 684.46, 736.78,
    827.12, 910.52, 986.38, 1070.38, 1145.84, 1267.20, 1327.36, 1417.91, 1516.22, 1626.44, 1737.84,
    1783.25, 1897.50, 1973.98, 2001.76, 2106.02, 2163.58, 2266.88, 2363.20, 2502.20, 2561.76,
    2682.92, 2794.13, 2898.38, 3009.60, 3113.86, 3225.06, 3336.27, 3447.48, 3544.79, 3649.03,
    3753.41, 3829.76, 3920.12, 4000.33, 4078.93, 4177.38, 4280.70, 4387.16,
];

/// Head per stage (ft).
pub const REFERENCE_HEADS: [f64; 51] = [
    40.27, 40.51, 40.76, 41.01, 41.25, 41.33, 41.63, 41.87, 42.12, 42.24, 42.61, 42.86, 43.11,
    43.28, 43.33, 43.36, 43.36, 43.33, 43.33, 42.93, 42.74, 42.37, 42.00, 41.83, 41.03, 40.51,
    40.27, 39.40, 38.88, 38.28, 37.48, 36.07, 35.45, 34.21, 32.86, 31.50, 30.02, 28.53, 26.80,
    24.93, 23.10, 21.37, 19.30, 17.66, 15.68, 13.95, 12.10, 10.24, 8.06, 8.06, 8.89,
];

pub fn reference_dataset() -> CurveResult<PumpCurveDataset> {
    PumpCurveDataset::new(REFERENCE_FLOWS.to_vec(), REFERENCE_HEADS.to_vec())
}
