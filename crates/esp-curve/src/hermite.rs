//! Piecewise cubic Hermite evaluation shared by the spline and PCHIP curves.

/// Piecewise cubic defined by knot values and knot derivatives.
///
/// Outside the knot range the first or last piece is extended as-is, so
/// evaluation never fails.
#[derive(Clone, Debug)]
pub struct HermiteCurve {
    x: Vec<f64>,
    y: Vec<f64>,
    d: Vec<f64>,
}

impl HermiteCurve {
    /// Caller guarantees equal lengths, at least two knots and increasing `x`.
    pub(crate) fn new(x: Vec<f64>, y: Vec<f64>, d: Vec<f64>) -> Self {
        debug_assert!(x.len() >= 2 && x.len() == y.len() && y.len() == d.len());
        Self { x, y, d }
    }

    /// Knot derivatives.
    pub fn derivatives(&self) -> &[f64] {
        &self.d
    }

    /// Index of the piece used for `v`.
    fn piece(&self, v: f64) -> usize {
        let last_piece = self.x.len() - 2;
        self.x
            .partition_point(|&knot| knot <= v)
            .saturating_sub(1)
            .min(last_piece)
    }

    pub fn eval(&self, v: f64) -> f64 {
        let i = self.piece(v);
        let dx = self.x[i + 1] - self.x[i];
        let secant = (self.y[i + 1] - self.y[i]) / dx;
        let c3 = (self.d[i] + self.d[i + 1] - 2.0 * secant) / (dx * dx);
        let c2 = (3.0 * secant - 2.0 * self.d[i] - self.d[i + 1]) / dx;
        let t = v - self.x[i];
        ((c3 * t + c2) * t + self.d[i]) * t + self.y[i]
    }
}

/// Interval widths and secant slopes of a sample set.
pub(crate) fn widths_and_secants(x: &[f64], y: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
    let m = y
        .windows(2)
        .zip(&h)
        .map(|(w, dx)| (w[1] - w[0]) / dx)
        .collect();
    (h, m)
}
