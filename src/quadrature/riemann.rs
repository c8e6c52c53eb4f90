use num_traits::Float;

use crate::models::samples::Samples;
use crate::quadrature::{count, DiscreteQuadrature, Quadrature};
use crate::utils::error::Result;
use crate::utils::validation::{check_finite_limits, check_intervals, check_sample_count, check_samples};

/// Left Riemann sums
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiemannRule {
    /// Sub-interval count used by [`RiemannRule::integrate_fixed`]
    intervals: Option<usize>,
}

impl RiemannRule {
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

impl<T: Float> Quadrature<T> for RiemannRule {
    fn integrate<F: Fn(T) -> T>(&self, f: F, a: T, b: T, n: usize) -> Result<T> {
        check_intervals(n, 1)?;
        check_finite_limits(a, b)?;

        let dx = (b - a) / count(n);
        let sum = (0..n).fold(T::zero(), |sum, i| sum + f(a + count::<T>(i) * dx));
        Ok(sum * dx)
    }
}

impl<T: Float> DiscreteQuadrature<T> for RiemannRule {
    fn integrate_samples<X, Y>(&self, x: &X, y: &Y) -> Result<T>
    where
        X: Samples<T> + ?Sized,
        Y: Samples<T> + ?Sized,
    {
        check_samples(x.len(), y.len(), 2)?;

        // the last ordinate closes the final interval and is never weighted
        let sum = (0..x.len() - 1).fold(T::zero(), |sum, i| sum + y.at(i) * (x.at(i + 1) - x.at(i)));
        Ok(sum)
    }

    fn integrate_uniform<Y>(&self, y: &Y, dx: T) -> Result<T>
    where
        Y: Samples<T> + ?Sized,
    {
        check_sample_count(y.len(), 1)?;

        let sum = (0..y.len()).fold(T::zero(), |sum, i| sum + y.at(i));
        Ok(sum * dx)
    }
}
