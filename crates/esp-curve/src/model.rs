//! Pump curve model.

use esp_core::linspace;
use tracing::debug;

use crate::dataset::PumpCurveDataset;
use crate::error::CurveResult;
use crate::hermite::HermiteCurve;
use crate::inverse::InverseLookup;
use crate::{pchip, spline};

/// Single-stage pump performance curve.
///
/// Wraps a [`PumpCurveDataset`] with three interpolants built once at
/// construction:
///
/// - a not-a-knot cubic spline for scalar head lookups (`head_at`)
/// - a PCHIP curve for sampled, plotted curves (`head_curve`)
/// - a linear head → flow table for live monitoring (`flow_at`)
///
/// All lookups extrapolate outside the data range instead of failing.
#[derive(Clone, Debug)]
pub struct PumpCurveModel {
    dataset: PumpCurveDataset,
    spline: HermiteCurve,
    shape: HermiteCurve,
    inverse: InverseLookup,
}

impl PumpCurveModel {
    /// Build the interpolants for a dataset.
    ///
    /// # Errors
    /// Returns error if the spline system cannot be solved.
    pub fn new(dataset: PumpCurveDataset) -> CurveResult<Self> {
        let spline = spline::not_a_knot(dataset.flows(), dataset.heads())?;
        let shape = pchip::pchip(dataset.flows(), dataset.heads())?;
        let inverse = InverseLookup::new(dataset.flows(), dataset.heads());
        debug!(
            points = dataset.len(),
            max_flow = dataset.max_flow(),
            "pump curve model built"
        );
        Ok(Self {
            dataset,
            spline,
            shape,
            inverse,
        })
    }

    pub fn dataset(&self) -> &PumpCurveDataset {
        &self.dataset
    }

    /// Head per stage (ft) at `flow` (bpd) from the cubic spline.
    pub fn head_at(&self, flow: f64) -> f64 {
        self.spline.eval(flow)
    }

    /// Raw PCHIP head per stage at `flow`, without clamping.
    pub fn shape_head_at(&self, flow: f64) -> f64 {
        self.shape.eval(flow)
    }

    /// PCHIP head per stage at each sample, negatives clamped to zero.
    pub fn head_curve(&self, flow_samples: &[f64]) -> Vec<f64> {
        flow_samples
            .iter()
            .map(|&q| self.shape.eval(q).max(0.0))
            .collect()
    }

    /// `n` evenly spaced flows over `[0, max dataset flow]` paired with
    /// their [`head_curve`](Self::head_curve) values.
    pub fn sampled_head_curve(&self, n: usize) -> Vec<(f64, f64)> {
        let flows = linspace(0.0, self.dataset.max_flow(), n);
        let heads = self.head_curve(&flows);
        flows.into_iter().zip(heads).collect()
    }

    /// Flow (bpd) producing `head` (ft per stage), by inverse linear lookup.
    ///
    /// Only meaningful where head falls monotonically with flow.
    pub fn flow_at(&self, head: f64) -> f64 {
        self.inverse.eval(head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::reference_dataset;
    use esp_core::{Tolerances, nearly_equal};

    fn reference_model() -> PumpCurveModel {
        PumpCurveModel::new(reference_dataset().unwrap()).unwrap()
    }

    #[test]
    fn head_at_passes_through_samples() {
        let model = reference_model();
        for (q, h) in model.dataset().points() {
            assert!((model.head_at(q) - h).abs() < 1e-9, "q={q}");
        }
    }

    #[test]
    fn head_at_design_rate() {
        let model = reference_model();
        let tol = Tolerances {
            abs: 1e-6,
            rel: 1e-9,
        };
        assert!(nearly_equal(model.head_at(800.0), 43.050346716710756, tol));
        assert!(nearly_equal(model.head_at(2500.0), 36.093077121447855, tol));
    }

    #[test]
    fn spline_and_pchip_differ_near_peak() {
        let model = reference_model();
        let spline = model.head_at(1000.0);
        let shape = model.shape_head_at(1000.0);
        assert!((spline - 43.33504677408866).abs() < 1e-6);
        assert!((shape - 43.33656221259255).abs() < 1e-6);
        assert!(spline != shape);
    }

    #[test]
    fn head_curve_is_clamped_at_zero() {
        let model = reference_model();
        // Far beyond the data the end polynomial turns negative.
        assert!(model.shape_head_at(5000.0) < 0.0);
        assert_eq!(model.head_curve(&[5000.0]), vec![0.0]);
    }

    #[test]
    fn sampled_curve_spans_zero_to_max_flow() {
        let model = reference_model();
        let samples = model.sampled_head_curve(100);
        assert_eq!(samples.len(), 100);
        assert_eq!(samples[0].0, 0.0);
        assert_eq!(samples[99].0, 4387.16);
        assert!((samples[0].1 - 40.15501794850859).abs() < 1e-6);
        assert!(samples.iter().all(|&(_, h)| h >= 0.0));
    }

    #[test]
    fn extrapolates_below_first_sample() {
        let model = reference_model();
        assert!((model.head_at(0.0) - 40.131657464435484).abs() < 1e-6);
    }
}
