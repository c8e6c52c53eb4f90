use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::error::IntegrateError;

/// Integration methods available for tabulated data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Left Riemann sum
    #[default]
    Riemann,
    /// Trapezoid rule
    Trapezoid,
    /// Composite Simpson's rule on the sample spacing
    Simpson,
    /// Gauss-Legendre quadrature of a cubic spline through the samples
    GaussLegendre,
}

impl Method {
    /// All methods, in the order prefixes are matched against
    pub const ALL: [Self; 4] = [Self::Riemann, Self::Trapezoid, Self::Simpson, Self::GaussLegendre];

    /// Returns the name used on the command line
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Riemann => "riemann",
            Self::Trapezoid => "trapezoid",
            Self::Simpson => "simpson",
            Self::GaussLegendre => "gauss-legendre",
        }
    }

    /// Returns the one line description shown by `--list`
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Riemann => "simple riemann sum",
            Self::Trapezoid => "trapezoid rule",
            Self::Simpson => "simpson's rule",
            Self::GaussLegendre => "Gauss-Legendre quadrature (uses interpolation)",
        }
    }

    /// Whether the method can integrate data with `dimensions` independent variables
    pub const fn supports_dimensions(&self, dimensions: u8) -> bool {
        match dimensions {
            1 => true,
            2 => !matches!(self, Self::GaussLegendre),
            _ => false,
        }
    }

    /// Selects the first method whose name starts with `prefix`
    ///
    /// ```
    /// use integrate::models::method::Method;
    ///
    /// assert_eq!(Method::from_prefix("t"), Some(Method::Trapezoid));
    /// assert_eq!(Method::from_prefix("gauss"), Some(Method::GaussLegendre));
    /// assert_eq!(Method::from_prefix("midpoint"), None);
    /// ```
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        let prefix = prefix.to_lowercase();
        Self::ALL.into_iter().find(|method| method.name().starts_with(&prefix))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Method {
    type Err = IntegrateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_prefix(s).ok_or_else(|| IntegrateError::UnknownMethod(s.to_string()))
    }
}
