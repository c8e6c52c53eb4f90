// Common error types for integrate

use thiserror::Error;

/// Errors produced by the quadrature rules, the data readers and the CLI
#[derive(Debug, Error)]
pub enum IntegrateError {
    /// A rule was asked to use fewer sub-intervals than it can work with
    #[error("Invalid number of sub-intervals: {got} (need at least {min})")]
    InvalidIntervals { got: usize, min: usize },

    /// Abscissa and ordinate sequences differ in length
    #[error("Sample length mismatch: x has {x_len} values but y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    /// Not enough samples to form a single interval
    #[error("Too few samples: need at least {needed}, got {got}")]
    TooFewSamples { needed: usize, got: usize },

    /// A 2D grid whose shape does not match its axes
    #[error("Grid shape {rows}x{cols} does not match axes of length {x_len} and {y_len}")]
    GridShape {
        rows: usize,
        cols: usize,
        x_len: usize,
        y_len: usize,
    },

    /// Gauss-Legendre or Gauss-Kronrod rule size that cannot be constructed
    #[error("Unsupported quadrature order: {0}")]
    UnsupportedOrder(usize),

    /// Limits of integration that cannot be used
    #[error("Invalid integration limits: {0}")]
    InvalidLimits(String),

    /// Data that cannot be interpolated
    #[error("Invalid interpolation data: {0}")]
    InvalidSpline(String),

    /// No method name starts with the requested prefix
    #[error("Unrecognized integration method ({0}).")]
    UnknownMethod(String),

    /// Method exists but not for the requested dimensionality
    #[error("Integration method '{method}' is not supported for {dimensions}D data.")]
    UnsupportedMethod { method: String, dimensions: u8 },

    /// Running integrals were requested for 2D data
    #[error("Indefinite integrals are not supported with 2D integrals (yet).")]
    IndefiniteUnsupported,

    /// Dimensions other than one or two
    #[error("Unsupported number of dimensions: {0} (must be 1 or 2)")]
    InvalidDimensions(u8),

    /// Configuration file problems
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem and stream errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output serialization failures
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntegrateError {
    /// Process exit code for this error, following sysexits.h where one fits
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownMethod(_)
            | Self::UnsupportedMethod { .. }
            | Self::IndefiniteUnsupported
            | Self::InvalidDimensions(_) => 2,
            Self::Io(_) => 74,
            Self::Config(_) => 78,
            Self::InvalidIntervals { .. }
            | Self::LengthMismatch { .. }
            | Self::TooFewSamples { .. }
            | Self::GridShape { .. }
            | Self::UnsupportedOrder(_)
            | Self::InvalidLimits(_)
            | Self::InvalidSpline(_) => 65,
            Self::Json(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, IntegrateError>;
