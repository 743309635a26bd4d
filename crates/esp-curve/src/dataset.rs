//! Validated pump curve samples.

use crate::error::{CurveError, CurveResult};

/// Interpolation needs at least this many samples.
pub const MIN_CURVE_POINTS: usize = 3;

/// Ordered (flow, head-per-stage) samples of a single pump stage.
///
/// Flows are positive and strictly increasing; heads are finite and
/// non-negative. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct PumpCurveDataset {
    flows: Vec<f64>,
    heads: Vec<f64>,
}

impl PumpCurveDataset {
    /// Build a dataset from parallel flow (bpd) and head-per-stage (ft) columns.
    ///
    /// # Errors
    /// Returns error if the columns differ in length, hold fewer than
    /// [`MIN_CURVE_POINTS`] rows, or contain values a pump curve cannot hold.
    pub fn new(flows: Vec<f64>, heads: Vec<f64>) -> CurveResult<Self> {
        if flows.len() != heads.len() {
            return Err(CurveError::LengthMismatch {
                flows: flows.len(),
                heads: heads.len(),
            });
        }
        if flows.len() < MIN_CURVE_POINTS {
            return Err(CurveError::TooFewPoints {
                len: flows.len(),
                min: MIN_CURVE_POINTS,
            });
        }

        for (index, (&q, &h)) in flows.iter().zip(&heads).enumerate() {
            if !q.is_finite() || q <= 0.0 {
                return Err(CurveError::InvalidValue {
                    what: "flow",
                    index,
                    value: q,
                });
            }
            if !h.is_finite() || h < 0.0 {
                return Err(CurveError::InvalidValue {
                    what: "head",
                    index,
                    value: h,
                });
            }
        }

        if let Some(index) = flows.windows(2).position(|w| w[1] <= w[0]) {
            return Err(CurveError::NonIncreasingFlow { index: index + 1 });
        }

        Ok(Self { flows, heads })
    }

    /// Build a dataset from (flow, head) pairs.
    pub fn from_points(points: &[(f64, f64)]) -> CurveResult<Self> {
        let (flows, heads) = points.iter().copied().unzip();
        Self::new(flows, heads)
    }

    pub fn flows(&self) -> &[f64] {
        &self.flows
    }

    pub fn heads(&self) -> &[f64] {
        &self.heads
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// Always false: a dataset holds at least [`MIN_CURVE_POINTS`] samples.
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Largest flow in the dataset (the last sample).
    pub fn max_flow(&self) -> f64 {
        self.flows[self.flows.len() - 1]
    }

    /// Iterate over (flow, head) pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.flows.iter().copied().zip(self.heads.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimal_curve() {
        let ds = PumpCurveDataset::new(vec![100.0, 200.0, 300.0], vec![30.0, 25.0, 15.0]).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.max_flow(), 300.0);
    }

    #[test]
    fn rejects_two_points() {
        let err = PumpCurveDataset::new(vec![100.0, 200.0], vec![30.0, 25.0]).unwrap_err();
        assert_eq!(err, CurveError::TooFewPoints { len: 2, min: 3 });
    }

    #[test]
    fn rejects_mismatched_columns() {
        let err = PumpCurveDataset::new(vec![1.0, 2.0, 3.0], vec![3.0, 2.0]).unwrap_err();
        assert!(matches!(err, CurveError::LengthMismatch { .. }));
    }

    #[test]
    fn rejects_unsorted_flow() {
        let err =
            PumpCurveDataset::new(vec![100.0, 300.0, 200.0], vec![30.0, 25.0, 15.0]).unwrap_err();
        assert_eq!(err, CurveError::NonIncreasingFlow { index: 2 });
    }

    #[test]
    fn rejects_non_positive_flow_and_negative_head() {
        assert!(PumpCurveDataset::new(vec![0.0, 1.0, 2.0], vec![3.0, 2.0, 1.0]).is_err());
        assert!(PumpCurveDataset::new(vec![1.0, 2.0, 3.0], vec![3.0, -2.0, 1.0]).is_err());
        assert!(PumpCurveDataset::new(vec![1.0, f64::NAN, 3.0], vec![3.0, 2.0, 1.0]).is_err());
    }

    #[test]
    fn from_points_unzips() {
        let ds = PumpCurveDataset::from_points(&[(1.0, 9.0), (2.0, 8.0), (3.0, 6.0)]).unwrap();
        assert_eq!(ds.flows(), &[1.0, 2.0, 3.0]);
        assert_eq!(ds.heads(), &[9.0, 8.0, 6.0]);
    }
}
