// Integration of tabulated data with a method picked at runtime

use tracing::debug;

use crate::interpolation::CubicSpline;
use crate::models::method::Method;
use crate::quadrature::discretized::{RiemannRule2D, SimpsonRule2D, TrapezoidRule2D};
use crate::quadrature::gauss_legendre::GaussLegendre;
use crate::quadrature::riemann::RiemannRule;
use crate::quadrature::simpson::SimpsonRule;
use crate::quadrature::trapezoid::TrapezoidRule;
use crate::quadrature::DiscreteQuadrature;
use crate::utils::error::{IntegrateError, Result};
use crate::utils::validation::check_samples;

/// 1D samples prepared for repeated integration from the first abscissa
pub struct Tabulated1D<'a> {
    method: Method,
    x: &'a [f64],
    y: &'a [f64],
    spline: Option<CubicSpline<f64>>,
}

impl<'a> Tabulated1D<'a> {
    pub fn new(method: Method, x: &'a [f64], y: &'a [f64]) -> Result<Self> {
        check_samples(x.len(), y.len(), 2)?;

        let spline = match method {
            Method::GaussLegendre => Some(CubicSpline::new(x, y)?),
            _ => None,
        };

        Ok(Self { method, x, y, spline })
    }

    pub const fn len(&self) -> usize {
        self.x.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Integral from `x[0]` to `x[last]`
    pub fn integrate_to(&self, last: usize) -> Result<f64> {
        if last >= self.x.len() {
            return Err(IntegrateError::TooFewSamples {
                needed: last + 1,
                got: self.x.len(),
            });
        }

        let x = &self.x[..=last];
        let y = &self.y[..=last];
        match (self.method, &self.spline) {
            (Method::Riemann, _) => RiemannRule::new().integrate_samples(x, y),
            (Method::Trapezoid, _) => TrapezoidRule::new().integrate_samples(x, y),
            (Method::Simpson, _) => SimpsonRule::new().integrate_samples(x, y),
            (Method::GaussLegendre, Some(spline)) => {
                let order = GaussLegendre::order_for_samples(last);
                debug!(order, "integrating cubic spline with gauss-legendre");
                let rule = GaussLegendre::new(order)?;
                Ok(rule.integrate(|t| spline.eval(t), x[0], x[last]))
            }
            (Method::GaussLegendre, None) => Err(IntegrateError::InvalidSpline(
                "no interpolant was built for the data".to_string(),
            )),
        }
    }

    /// Integral over the whole table
    pub fn integrate(&self) -> Result<f64> {
        self.integrate_to(self.x.len() - 1)
    }

    /// `(x[n], integral from x[0] to x[n])` for every `n >= 1`
    pub fn running_integral(&self) -> Result<Vec<(f64, f64)>> {
        (1..self.x.len())
            .map(|n| Ok((self.x[n], self.integrate_to(n)?)))
            .collect()
    }
}

/// Integral of the whole 1D table
pub fn integrate_tabulated_1d(method: Method, x: &[f64], y: &[f64]) -> Result<f64> {
    Tabulated1D::new(method, x, y)?.integrate()
}

/// Running integral of a 1D table
pub fn running_integral(method: Method, x: &[f64], y: &[f64]) -> Result<Vec<(f64, f64)>> {
    Tabulated1D::new(method, x, y)?.running_integral()
}

/// Integral of `z[i][j]` sampled at `(x[i], y[j])`
pub fn integrate_tabulated_2d(method: Method, x: &[f64], y: &[f64], z: &[Vec<f64>]) -> Result<f64> {
    match method {
        Method::Riemann => RiemannRule2D::default().integrate_samples(x, y, z),
        Method::Trapezoid => TrapezoidRule2D::default().integrate_samples(x, y, z),
        Method::Simpson => SimpsonRule2D::default().integrate_samples(x, y, z),
        Method::GaussLegendre => Err(IntegrateError::UnsupportedMethod {
            method: method.name().to_string(),
            dimensions: 2,
        }),
    }
}
