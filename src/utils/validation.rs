// Argument validation shared by the quadrature rules

use num_traits::Float;

use crate::utils::error::{IntegrateError, Result};

/// Ensure a rule is given at least `min` sub-intervals
pub const fn check_intervals(n: usize, min: usize) -> Result<()> {
    if n < min {
        return Err(IntegrateError::InvalidIntervals { got: n, min });
    }
    Ok(())
}

/// Reject NaN limits; infinite limits are left to the rules that support them
pub fn check_limits<T: Float>(a: T, b: T) -> Result<()> {
    if a.is_nan() || b.is_nan() {
        return Err(IntegrateError::InvalidLimits(
            "limits of integration must not be NaN".to_string(),
        ));
    }
    Ok(())
}

/// Reject infinite or NaN limits for rules that sample the interval directly
pub fn check_finite_limits<T: Float>(a: T, b: T) -> Result<()> {
    check_limits(a, b)?;
    if a.is_infinite() || b.is_infinite() {
        return Err(IntegrateError::InvalidLimits(
            "this rule requires finite limits of integration".to_string(),
        ));
    }
    Ok(())
}

/// Ensure paired samples line up and there are enough of them
pub const fn check_samples(x_len: usize, y_len: usize, needed: usize) -> Result<()> {
    if x_len != y_len {
        return Err(IntegrateError::LengthMismatch { x_len, y_len });
    }
    check_sample_count(x_len, needed)
}

/// Ensure a single sequence has at least `needed` values
pub const fn check_sample_count(got: usize, needed: usize) -> Result<()> {
    if got < needed {
        return Err(IntegrateError::TooFewSamples { needed, got });
    }
    Ok(())
}
