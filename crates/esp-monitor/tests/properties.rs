use esp_monitor::{BepBand, OperatingStatus};
use proptest::prelude::*;

proptest! {
    #[test]
    fn status_optimal_iff_inside_window(
        flow in 0.0_f64..6000.0,
        lo in 500.0_f64..3000.0,
        width in 0.0_f64..2000.0,
    ) {
        let hi = lo + width;
        let status = OperatingStatus::classify(flow, lo, hi);
        prop_assert_eq!(status.is_optimal(), lo <= flow && flow <= hi);
        prop_assert_eq!(status.recommendations().is_empty(), status.is_optimal());
    }

    #[test]
    fn bep_band_is_symmetric(dev in 0.0_f64..100.0) {
        prop_assert_eq!(BepBand::classify(dev), BepBand::classify(-dev));
    }
}
