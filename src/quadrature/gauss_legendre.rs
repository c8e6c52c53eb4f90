use std::f64::consts::PI;

use num_traits::Float;

use crate::quadrature::{constant, count, Quadrature};
use crate::utils::error::{IntegrateError, Result};
use crate::utils::validation::{check_finite_limits, check_intervals};

/// Orders with a dedicated selection path in the command line tool
pub const SUPPORTED_ORDERS: [usize; 4] = [8, 16, 32, 64];

const MAX_ORDER: usize = 1024;
const NEWTON_TOLERANCE: f64 = 1e-15;
const NEWTON_ITERATIONS: usize = 100;

/// Gauss-Legendre quadrature of a fixed order
///
/// An order `n` rule evaluates the integrand at the `n` roots of the Legendre
/// polynomial `P_n` and integrates polynomials of degree `2n - 1` exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussLegendre {
    order: usize,
    nodes: Vec<f64>,
    weights: Vec<f64>,
}

impl GaussLegendre {
    pub fn new(order: usize) -> Result<Self> {
        if order == 0 || order > MAX_ORDER {
            return Err(IntegrateError::UnsupportedOrder(order));
        }

        let (nodes, weights) = legendre_nodes(order);
        Ok(Self { order, nodes, weights })
    }

    /// Pick the smallest of [`SUPPORTED_ORDERS`] that covers `n` samples, capped at the largest
    pub fn order_for_samples(n: usize) -> usize {
        SUPPORTED_ORDERS
            .iter()
            .copied()
            .find(|&order| n <= order)
            .unwrap_or(SUPPORTED_ORDERS[SUPPORTED_ORDERS.len() - 1])
    }

    pub const fn order(&self) -> usize {
        self.order
    }

    /// Abscissas on `[-1, 1]`, ascending
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Integrate `f` over `[a, b]` with a single application of the rule
    pub fn integrate<T, F>(&self, f: F, a: T, b: T) -> T
    where
        T: Float,
        F: Fn(T) -> T,
    {
        let half_width = (b - a) * constant(0.5);
        let midpoint = (b + a) * constant(0.5);

        let sum = self
            .nodes
            .iter()
            .zip(&self.weights)
            .fold(T::zero(), |sum, (&x, &w)| {
                sum + constant::<T>(w) * f(midpoint + half_width * constant(x))
            });
        sum * half_width
    }
}

/// Composite use: the rule is applied on each of `n` equal panels
impl<T: Float> Quadrature<T> for GaussLegendre {
    fn integrate<F: Fn(T) -> T>(&self, f: F, a: T, b: T, n: usize) -> Result<T> {
        check_intervals(n, 1)?;
        check_finite_limits(a, b)?;

        let dx = (b - a) / count(n);
        let sum = (0..n).fold(T::zero(), |sum, i| {
            let left = a + count::<T>(i) * dx;
            let right = if i + 1 == n { b } else { left + dx };
            sum + Self::integrate(self, &f, left, right)
        });
        Ok(sum)
    }
}

/// Roots of `P_n` and their weights, found by Newton iteration from the
/// Tricomi initial guesses
pub(crate) fn legendre_nodes(n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut nodes = vec![0.0; n];
    let mut weights = vec![0.0; n];
    let order = n as f64;

    // roots are symmetric, only the positive half is solved for
    for i in 0..n.div_ceil(2) {
        let mut z = (PI * (i as f64 + 0.75) / (order + 0.5)).cos();

        for _ in 0..NEWTON_ITERATIONS {
            let (p, dp) = legendre(n, z);
            let step = p / dp;
            z -= step;
            if step.abs() <= NEWTON_TOLERANCE {
                break;
            }
        }

        let (_, derivative) = legendre(n, z);
        let weight = 2.0 / ((1.0 - z * z) * derivative * derivative);
        nodes[i] = -z;
        nodes[n - 1 - i] = z;
        weights[i] = weight;
        weights[n - 1 - i] = weight;
    }

    if n % 2 == 1 {
        nodes[n / 2] = 0.0;
    }

    (nodes, weights)
}

/// `P_n(z)` and `P_n'(z)` by the three term recurrence
fn legendre(n: usize, z: f64) -> (f64, f64) {
    if n == 0 {
        return (1.0, 0.0);
    }

    let mut p0 = 1.0;
    let mut p1 = z;

    for k in 2..=n {
        let k = k as f64;
        let p2 = ((2.0 * k - 1.0) * z * p1 - (k - 1.0) * p0) / k;
        p0 = p1;
        p1 = p2;
    }

    let derivative = n as f64 * (z * p1 - p0) / (z * z - 1.0);
    (p1, derivative)
}
