use crate::LcError;

/// Floating point type used throughout the system
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

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, LcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(LcError::NonFinite { what, value: v })
    }
}

/// Clamp a value into an inclusive range, erroring instead of clamping.
pub fn ensure_in_range(v: Real, what: &'static str, min: Real, max: Real) -> Result<Real, LcError> {
    if v >= min && v <= max {
        Ok(v)
    } else {
        Err(LcError::OutOfRange {
            what,
            value: v,
            min,
            max,
        })
    }
}
