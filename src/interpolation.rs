// Natural cubic spline interpolation of tabulated data

use num_traits::Float;

use crate::quadrature::constant;
use crate::utils::error::{IntegrateError, Result};

/// A natural cubic spline through `(x, y)` pairs
///
/// Evaluates to zero outside `[x[0], x[n-1]]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline<T> {
    x: Vec<T>,
    y: Vec<T>,
    /// Second derivatives at the knots
    m: Vec<T>,
}

impl<T: Float> CubicSpline<T> {
    pub fn new(x: &[T], y: &[T]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(IntegrateError::InvalidSpline(format!(
                "x and y have different lengths ({} and {})",
                x.len(),
                y.len()
            )));
        }
        if x.len() < 2 {
            return Err(IntegrateError::InvalidSpline(format!(
                "at least 2 points are required, got {}",
                x.len()
            )));
        }
        if let Some(i) = x.windows(2).position(|w| !(w[1] > w[0])) {
            return Err(IntegrateError::InvalidSpline(format!(
                "x must be strictly increasing (point {} is not)",
                i + 1
            )));
        }

        let m = second_derivatives(x, y);
        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
            m,
        })
    }

    pub fn lower(&self) -> T {
        self.x[0]
    }

    pub fn upper(&self) -> T {
        self.x[self.x.len() - 1]
    }

    pub fn eval(&self, x: T) -> T {
        if !(x >= self.lower() && x <= self.upper()) {
            return T::zero();
        }

        // index of the interval [x_i, x_{i+1}] that holds x
        let i = self.x.partition_point(|&xi| xi <= x).clamp(1, self.x.len() - 1) - 1;

        let h = self.x[i + 1] - self.x[i];
        let a = (self.x[i + 1] - x) / h;
        let b = (x - self.x[i]) / h;
        let six: T = constant(6.0);

        a * self.y[i]
            + b * self.y[i + 1]
            + ((a * a * a - a) * self.m[i] + (b * b * b - b) * self.m[i + 1]) * h * h / six
    }
}

/// Solve the tridiagonal system for the knot second derivatives with
/// `m[0] = m[n-1] = 0` (Thomas algorithm)
fn second_derivatives<T: Float>(x: &[T], y: &[T]) -> Vec<T> {
    let n = x.len();
    let mut m = vec![T::zero(); n];
    if n < 3 {
        return m;
    }

    let two: T = constant(2.0);
    let six: T = constant(6.0);

    // forward sweep over the interior knots
    let mut c_prime = vec![T::zero(); n];
    let mut d_prime = vec![T::zero(); n];
    for i in 1..n - 1 {
        let h0 = x[i] - x[i - 1];
        let h1 = x[i + 1] - x[i];
        let lower = h0;
        let diag = two * (h0 + h1);
        let upper = h1;
        let rhs = six * ((y[i + 1] - y[i]) / h1 - (y[i] - y[i - 1]) / h0);

        let denom = diag - lower * c_prime[i - 1];
        c_prime[i] = upper / denom;
        d_prime[i] = (rhs - lower * d_prime[i - 1]) / denom;
    }

    for i in (1..n - 1).rev() {
        m[i] = d_prime[i] - c_prime[i] * m[i + 1];
    }
    m
}
