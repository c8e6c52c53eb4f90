use num_traits::Float;

use crate::models::samples::{Grid, GridFn, IndexFn, Samples};
use crate::quadrature::riemann::RiemannRule;
use crate::quadrature::simpson::SimpsonRule;
use crate::quadrature::trapezoid::TrapezoidRule;
use crate::quadrature::{count, DiscreteQuadrature};
use crate::utils::error::{IntegrateError, Result};
use crate::utils::validation::check_intervals;

/// 2D integration of gridded data by iterating a 1D rule
///
/// Every row `f[i][..]` is integrated along y, then the row integrals are
/// integrated along x with the same rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Discretized2D<R> {
    rule: R,
}

pub type RiemannRule2D = Discretized2D<RiemannRule>;
pub type TrapezoidRule2D = Discretized2D<TrapezoidRule>;
pub type SimpsonRule2D = Discretized2D<SimpsonRule>;

impl<R> Discretized2D<R> {
    pub const fn new(rule: R) -> Self {
        Self { rule }
    }

    pub const fn rule(&self) -> &R {
        &self.rule
    }

    /// Integrate `f` sampled on the lattice `x` by `y`
    pub fn integrate_samples<T, X, Y, G>(&self, x: &X, y: &Y, f: &G) -> Result<T>
    where
        T: Float,
        R: DiscreteQuadrature<T>,
        X: Samples<T> + ?Sized,
        Y: Samples<T> + ?Sized,
        G: Grid<T> + ?Sized,
    {
        check_shape(f, x.len(), y.len())?;

        let sums = (0..f.rows())
            .map(|i| self.rule.integrate_samples(y, &f.row(i)))
            .collect::<Result<Vec<T>>>()?;
        self.rule.integrate_samples(x, &sums)
    }

    /// Integrate `f` sampled with constant spacings `dx` and `dy`
    pub fn integrate_uniform<T, G>(&self, f: &G, dx: T, dy: T) -> Result<T>
    where
        T: Float,
        R: DiscreteQuadrature<T>,
        G: Grid<T> + ?Sized,
    {
        check_shape(f, f.rows(), f.cols())?;

        let sums = (0..f.rows())
            .map(|i| self.rule.integrate_uniform(&f.row(i), dy))
            .collect::<Result<Vec<T>>>()?;
        self.rule.integrate_uniform(&sums, dx)
    }

    /// Integrate `f(x, y)` over `[xa, xb] x [ya, yb]` discretised into
    /// `xn` by `yn` intervals
    ///
    /// The lattice is never stored; abscissas and values are computed on demand.
    #[allow(clippy::too_many_arguments)]
    pub fn integrate<T, F>(&self, f: F, xa: T, xb: T, xn: usize, ya: T, yb: T, yn: usize) -> Result<T>
    where
        T: Float,
        R: DiscreteQuadrature<T>,
        F: Fn(T, T) -> T,
    {
        check_intervals(xn, 1)?;
        check_intervals(yn, 1)?;

        let dx = (xb - xa) / count(xn);
        let dy = (yb - ya) / count(yn);
        let x_at = |i: usize| xa + count::<T>(i) * dx;
        let y_at = |j: usize| ya + count::<T>(j) * dy;

        let x = IndexFn::new(xn + 1, x_at);
        let y = IndexFn::new(yn + 1, y_at);
        let grid = GridFn::new(xn + 1, yn + 1, |i, j| f(x_at(i), y_at(j)));
        self.integrate_samples(&x, &y, &grid)
    }
}

fn check_shape<T, G: Grid<T> + ?Sized>(f: &G, x_len: usize, y_len: usize) -> Result<()> {
    let rows = f.rows();
    let cols = f.cols();
    let ragged = (0..rows).any(|i| f.row_len(i) != y_len);
    if rows != x_len || cols != y_len || ragged {
        return Err(IntegrateError::GridShape {
            rows,
            cols,
            x_len,
            y_len,
        });
    }
    Ok(())
}
