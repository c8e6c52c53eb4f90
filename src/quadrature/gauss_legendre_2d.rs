use num_traits::Float;

use crate::quadrature::constant;
use crate::quadrature::gauss_legendre::GaussLegendre;
use crate::utils::error::Result;

/// Tensor product Gauss-Legendre quadrature over a rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct GaussLegendre2D {
    rule: GaussLegendre,
}

impl GaussLegendre2D {
    pub fn new(order: usize) -> Result<Self> {
        Ok(Self {
            rule: GaussLegendre::new(order)?,
        })
    }

    pub const fn order(&self) -> usize {
        self.rule.order()
    }

    /// Integrate `f(x, y)` over `[a, b] x [c, d]`
    pub fn integrate<T, F>(&self, f: F, a: T, b: T, c: T, d: T) -> T
    where
        T: Float,
        F: Fn(T, T) -> T,
    {
        let half_width = (b - a) * constant(0.5);
        let midpoint = (b + a) * constant(0.5);

        // g(x_i) = integral of f(x_i, y) dy, then combine with the x weights
        let sum = self
            .rule
            .nodes()
            .iter()
            .zip(self.rule.weights())
            .fold(T::zero(), |sum, (&node, &weight)| {
                let x = midpoint + half_width * constant(node);
                sum + constant::<T>(weight) * self.rule.integrate(|y| f(x, y), c, d)
            });
        sum * half_width
    }
}
