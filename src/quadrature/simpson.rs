use num_traits::Float;

use crate::models::samples::{IndexFn, Samples};
use crate::quadrature::{constant, count, DiscreteQuadrature, Quadrature};
use crate::utils::error::Result;
use crate::utils::validation::{check_finite_limits, check_intervals, check_sample_count, check_samples};

/// Simpson's rule
///
/// For callables every sub-interval is integrated with the three point
/// formula, so the rule is exact for cubics regardless of `n`. For sampled
/// data the composite rule works on arbitrary spacing: pairs of intervals are
/// fit with a parabola and a trailing odd interval gets the matching end
/// correction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpsonRule {
    intervals: Option<usize>,
}

impl SimpsonRule {
    pub const fn new() -> Self {
        Self { intervals: None }
    }

    /// A rule that always uses `n` sub-intervals
    pub const fn with_intervals(n: usize) -> Self {
        Self { intervals: Some(n) }
    }

    pub const fn intervals(&self) -> Option<usize> {
        self.intervals
    }

    /// Integrate using the interval count given at construction
    pub fn integrate_fixed<T: Float, F: Fn(T) -> T>(&self, f: F, a: T, b: T) -> Result<T> {
        self.integrate(f, a, b, self.intervals.unwrap_or(0))
    }
}

impl<T: Float> Quadrature<T> for SimpsonRule {
    fn integrate<F: Fn(T) -> T>(&self, f: F, a: T, b: T, n: usize) -> Result<T> {
        check_intervals(n, 1)?;
        check_finite_limits(a, b)?;

        let dx = (b - a) / count(n);
        let half = dx * constant(0.5);
        let four: T = constant(4.0);

        let mut left = f(a);
        let mut sum = T::zero();
        for i in 0..n {
            let x = a + count::<T>(i) * dx;
            let right = if i + 1 == n { f(b) } else { f(x + dx) };
            sum = sum + left + four * f(x + half) + right;
            left = right;
        }
        // the interval width dx is 2h, so dx/6 == h/3
        Ok(sum * dx / constant(6.0))
    }
}

impl<T: Float> DiscreteQuadrature<T> for SimpsonRule {
    fn integrate_samples<X, Y>(&self, x: &X, y: &Y) -> Result<T>
    where
        X: Samples<T> + ?Sized,
        Y: Samples<T> + ?Sized,
    {
        check_samples(x.len(), y.len(), 2)?;

        let intervals = x.len() - 1;
        let width = |i: usize| x.at(i + 1) - x.at(i);

        if intervals == 1 {
            return Ok(trapezoid(width(0), y.at(0), y.at(1)));
        }

        let mut sum = T::zero();
        let mut i = 0;
        while i + 2 <= intervals {
            sum = sum + panel(width(i), width(i + 1), y.at(i), y.at(i + 1), y.at(i + 2));
            i += 2;
        }

        if intervals % 2 == 1 {
            let n = intervals;
            sum = sum + end_correction(width(n - 2), width(n - 1), y.at(n - 2), y.at(n - 1), y.at(n));
        }

        Ok(sum)
    }

    fn integrate_uniform<Y>(&self, y: &Y, dx: T) -> Result<T>
    where
        Y: Samples<T> + ?Sized,
    {
        check_sample_count(y.len(), 2)?;

        let x = IndexFn::new(y.len(), |i| count::<T>(i) * dx);
        self.integrate_samples(&x, y)
    }
}

fn trapezoid<T: Float>(h: T, y0: T, y1: T) -> T {
    h * (y0 + y1) * constant(0.5)
}

/// Integral of the parabola through three points spanning widths `h0` and `h1`
fn panel<T: Float>(h0: T, h1: T, y0: T, y1: T, y2: T) -> T {
    if h0.is_zero() || h1.is_zero() {
        return trapezoid(h0, y0, y1) + trapezoid(h1, y1, y2);
    }

    let two: T = constant(2.0);
    let span = h0 + h1;
    span / constant(6.0) * ((two - h1 / h0) * y0 + span * span / (h0 * h1) * y1 + (two - h0 / h1) * y2)
}

/// Integral over the last interval (width `h1`) of the parabola through the final three points
fn end_correction<T: Float>(h0: T, h1: T, y0: T, y1: T, y2: T) -> T {
    if h0.is_zero() || h1.is_zero() {
        return trapezoid(h1, y1, y2);
    }

    let three: T = constant(3.0);
    let six: T = constant(6.0);
    let span = h0 + h1;
    let alpha = (constant::<T>(2.0) * h1 * h1 + three * h0 * h1) / (six * span);
    let beta = (h1 * h1 + three * h0 * h1) / (six * h0);
    let eta = h1 * h1 * h1 / (six * h0 * span);
    alpha * y2 + beta * y1 - eta * y0
}
