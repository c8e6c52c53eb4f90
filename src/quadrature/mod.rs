// Quadrature rules for functions and sampled data

pub mod adaptive;
pub mod discretized;
pub mod gauss_kronrod;
pub mod gauss_legendre;
pub mod gauss_legendre_2d;
pub mod kronrod;
pub mod riemann;
pub mod simpson;
pub mod tabulated;
pub mod trapezoid;

use num_traits::Float;

use crate::models::samples::Samples;
use crate::utils::error::Result;

pub use adaptive::{AdaptiveEstimate, AdaptiveQuadrature};
pub use discretized::{Discretized2D, RiemannRule2D, SimpsonRule2D, TrapezoidRule2D};
pub use gauss_kronrod::{GaussKronrod, KronrodEstimate};
pub use gauss_legendre::GaussLegendre;
pub use gauss_legendre_2d::GaussLegendre2D;
pub use kronrod::KronrodRule;
pub use riemann::RiemannRule;
pub use simpson::SimpsonRule;
pub use trapezoid::TrapezoidRule;

/// A rule that integrates a callable over `[a, b]` split into `n` sub-intervals
pub trait Quadrature<T: Float> {
    fn integrate<F: Fn(T) -> T>(&self, f: F, a: T, b: T, n: usize) -> Result<T>;
}

/// A rule that integrates tabulated values
pub trait DiscreteQuadrature<T: Float> {
    /// Integrate `y` sampled at the abscissas `x`
    fn integrate_samples<X, Y>(&self, x: &X, y: &Y) -> Result<T>
    where
        X: Samples<T> + ?Sized,
        Y: Samples<T> + ?Sized;

    /// Integrate `y` sampled with constant spacing `dx`
    fn integrate_uniform<Y>(&self, y: &Y, dx: T) -> Result<T>
    where
        Y: Samples<T> + ?Sized;
}

/// Convert an `f64` constant into the working float type
pub(crate) fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Convert an index or count into the working float type
pub(crate) fn count<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::nan)
}
