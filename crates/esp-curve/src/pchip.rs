//! Shape-preserving piecewise cubic Hermite interpolation (Fritsch–Carlson).
//!
//! Interior derivatives are the weighted harmonic mean of the neighbouring
//! secants, or zero where the data turns. End derivatives use the
//! three-point one-sided formula, limited so the end pieces cannot
//! overshoot.

use crate::error::{CurveError, CurveResult};
use crate::hermite::{HermiteCurve, widths_and_secants};

pub fn pchip(x: &[f64], y: &[f64]) -> CurveResult<HermiteCurve> {
    let n = x.len();
    if n < 3 {
        return Err(CurveError::TooFewPoints { len: n, min: 3 });
    }
    let (h, m) = widths_and_secants(x, y);

    let mut d = vec![0.0; n];
    for k in 1..n - 1 {
        let turns = m[k - 1].signum() != m[k].signum() || m[k - 1] == 0.0 || m[k] == 0.0;
        if !turns {
            let w1 = 2.0 * h[k] + h[k - 1];
            let w2 = h[k] + 2.0 * h[k - 1];
            d[k] = (w1 + w2) / (w1 / m[k - 1] + w2 / m[k]);
        }
    }
    d[0] = end_derivative(h[0], h[1], m[0], m[1]);
    d[n - 1] = end_derivative(h[n - 2], h[n - 3], m[n - 2], m[n - 3]);

    Ok(HermiteCurve::new(x.to_vec(), y.to_vec(), d))
}

fn sign(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

fn end_derivative(h0: f64, h1: f64, m0: f64, m1: f64) -> f64 {
    let d = ((2.0 * h0 + h1) * m0 - h0 * m1) / (h0 + h1);
    if sign(d) != sign(m0) {
        0.0
    } else if sign(m0) != sign(m1) && d.abs() > (3.0 * m0).abs() {
        3.0 * m0
    } else {
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_knots() {
        let x = vec![0.0, 1.0, 2.0, 4.0];
        let y = vec![10.0, 9.0, 6.0, 1.0];
        let c = pchip(&x, &y).unwrap();
        for (xi, yi) in x.iter().zip(&y) {
            assert!((c.eval(*xi) - yi).abs() < 1e-12);
        }
    }

    #[test]
    fn flat_segment_stays_flat() {
        let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let y = vec![5.0, 5.0, 5.0, 3.0, 1.0];
        let c = pchip(&x, &y).unwrap();
        for v in [0.25, 0.5, 1.5, 1.9] {
            assert!((c.eval(v) - 5.0).abs() < 1e-12, "v={v}");
        }
    }

    #[test]
    fn local_maximum_is_not_overshot() {
        let x = vec![0.0, 1.0, 2.0, 3.0];
        let y = vec![1.0, 3.0, 3.0, 1.0];
        let c = pchip(&x, &y).unwrap();
        for i in 0..=300 {
            let v = i as f64 * 0.01;
            assert!(c.eval(v) <= 3.0 + 1e-12);
        }
    }

    #[test]
    fn end_derivative_is_limited() {
        // Secants change sign at the end: a large one-sided estimate is capped at 3*m0.
        let d = end_derivative(1.0, 10.0, 1.0, -5.0);
        assert!(d <= 3.0);
        // Opposite sign from the end secant is zeroed.
        assert_eq!(end_derivative(1.0, 1.0, 1.0, 5.0), 0.0);
    }
}
