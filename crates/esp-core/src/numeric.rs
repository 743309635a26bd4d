use crate::EspError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, EspError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(EspError::NonFinite { what, value: v })
    }
}

/// Division that refuses an exactly-zero divisor.
///
/// Used where a zero divisor means the calculation has no answer at all.
pub fn checked_div(num: Real, den: Real, what: &'static str) -> Result<Real, EspError> {
    if den == 0.0 {
        return Err(EspError::Domain {
            what: format!("division by zero computing {what}"),
        });
    }
    Ok(num / den)
}

/// Ratio that degrades to zero unless the divisor is strictly positive.
pub fn ratio_or_zero(num: Real, den: Real) -> Real {
    if den > 0.0 { num / den } else { 0.0 }
}

/// `base^exp` that rejects a negative base under a fractional exponent.
pub fn checked_powf(base: Real, exp: Real, what: &'static str) -> Result<Real, EspError> {
    if base < 0.0 && exp.fract() != 0.0 {
        return Err(EspError::Domain {
            what: format!("negative base {base} raised to fractional power {exp} in {what}"),
        });
    }
    Ok(base.powf(exp))
}

/// `n` evenly spaced samples over `[start, end]`, both ends included.
pub fn linspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as Real;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as Real })
                .collect()
        }
    }
}
