//! Not-a-knot cubic spline.
//!
//! Knot derivatives come from the standard slope formulation: continuity of
//! the second derivative at interior knots, plus continuity of the third
//! derivative across the second and second-to-last knots. The system is
//! tridiagonal and is solved with an LU factorization.

use nalgebra::{DMatrix, DVector};

use crate::error::{CurveError, CurveResult};
use crate::hermite::{HermiteCurve, widths_and_secants};

/// Build the not-a-knot spline through `(x, y)`.
///
/// With exactly three samples the not-a-knot conditions collapse to the
/// single parabola through them.
pub fn not_a_knot(x: &[f64], y: &[f64]) -> CurveResult<HermiteCurve> {
    let n = x.len();
    if n < 3 {
        return Err(CurveError::TooFewPoints { len: n, min: 3 });
    }
    let (h, m) = widths_and_secants(x, y);

    let d = if n == 3 {
        // p(x) = y0 + m0 (x - x0) + c (x - x0)(x - x1)
        let c = (m[1] - m[0]) / (x[2] - x[0]);
        x.iter()
            .map(|&xi| m[0] + c * (2.0 * xi - x[0] - x[1]))
            .collect()
    } else {
        solve_slopes(&h, &m)?
    };

    Ok(HermiteCurve::new(x.to_vec(), y.to_vec(), d))
}

fn solve_slopes(h: &[f64], m: &[f64]) -> CurveResult<Vec<f64>> {
    let n = h.len() + 1;
    let mut a = DMatrix::<f64>::zeros(n, n);
    let mut b = DVector::<f64>::zeros(n);

    let span = h[0] + h[1];
    a[(0, 0)] = h[1];
    a[(0, 1)] = span;
    b[0] = ((h[0] + 2.0 * span) * h[1] * m[0] + h[0] * h[0] * m[1]) / span;

    for i in 1..n - 1 {
        a[(i, i - 1)] = h[i];
        a[(i, i)] = 2.0 * (h[i - 1] + h[i]);
        a[(i, i + 1)] = h[i - 1];
        b[i] = 3.0 * (h[i] * m[i - 1] + h[i - 1] * m[i]);
    }

    let last = n - 1;
    let span = h[last - 1] + h[last - 2];
    a[(last, last - 1)] = span;
    a[(last, last)] = h[last - 2];
    b[last] = (h[last - 1] * h[last - 1] * m[last - 2]
        + (2.0 * span + h[last - 1]) * h[last - 2] * m[last - 1])
        / span;

    let d = a.lu().solve(&b).ok_or(CurveError::SingularSpline)?;
    Ok(d.iter().copied().collect())
}
