// integrate - numerical integration of functions and tabulated data
// Core library functionality

pub mod cli;
pub mod interpolation;
pub mod models;
pub mod quadrature;
pub mod utils;

// Re-export commonly used types
pub use interpolation::CubicSpline;
pub use models::method::Method;
pub use models::samples::{Grid, GridFn, IndexFn, Samples};
pub use quadrature::adaptive::{AdaptiveEstimate, AdaptiveQuadrature};
pub use quadrature::discretized::{Discretized2D, RiemannRule2D, SimpsonRule2D, TrapezoidRule2D};
pub use quadrature::gauss_kronrod::{GaussKronrod, KronrodEstimate};
pub use quadrature::gauss_legendre::GaussLegendre;
pub use quadrature::gauss_legendre_2d::GaussLegendre2D;
pub use quadrature::kronrod::KronrodRule;
pub use quadrature::riemann::RiemannRule;
pub use quadrature::simpson::SimpsonRule;
pub use quadrature::trapezoid::TrapezoidRule;
pub use quadrature::{DiscreteQuadrature, Quadrature};
pub use utils::error::{IntegrateError, Result};
