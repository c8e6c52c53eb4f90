use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::models::method::Method;
use crate::quadrature::tabulated::{integrate_tabulated_2d, Tabulated1D};
use crate::utils::config::IntegrateConfig;
use crate::utils::error::{IntegrateError, Result};
use crate::utils::gnuplot::{extract_1d, extract_2d, read_gnuplot_data, read_gnuplot_file, DataPoint};

/// Integrate tabulated data read from a file or stdin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrateCommand {
    /// Path of the data file, `-` for stdin
    pub input: String,
    pub dimensions: u8,
    pub method: Method,
    pub indefinite: bool,
    pub batch: bool,
    pub json: bool,
    /// Significant digits for plain output, shortest round-trip form when unset
    pub precision: Option<usize>,
}

/// What an integration produced
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A single definite integral
    Definite(f64),
    /// `(x_n, integral from x_0 to x_n)` pairs
    Running(Vec<(f64, f64)>),
}

/// JSON response format for the integrate command
#[derive(Debug, Serialize, Deserialize)]
pub struct IntegrateResponse {
    pub status: String,
    pub method: Method,
    pub dimensions: u8,
    pub points: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running: Option<Vec<RunningValue>>,
}

/// One entry of an indefinite integral
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RunningValue {
    pub x: f64,
    pub integral: f64,
}

impl IntegrateCommand {
    /// Resolve flags against the configuration file; flags win
    pub fn from_cli(cli: &Cli, config: &IntegrateConfig) -> Result<Self> {
        let method = match &cli.method {
            Some(name) => name.parse()?,
            None => config.method()?.unwrap_or_default(),
        };

        let dimensions = cli.dimensions.or(config.defaults.dimensions).unwrap_or(1);
        if !(1..=2).contains(&dimensions) {
            return Err(IntegrateError::InvalidDimensions(dimensions));
        }

        Ok(Self {
            input: cli.integrate_data.clone(),
            dimensions,
            method,
            indefinite: cli.indefinite,
            batch: cli.batch,
            json: cli.json || config.output.json,
            precision: config.output.precision,
        })
    }

    /// Execute the integrate command, writing results to stdout
    pub fn run(&self) -> Result<()> {
        self.check_method()?;

        let data = self.read_data()?;
        let outcome = self.integrate(&data)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render(&outcome, data.len(), &mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Reject method and dimension combinations before touching the input
    pub fn check_method(&self) -> Result<()> {
        if !self.method.supports_dimensions(self.dimensions) {
            return Err(IntegrateError::UnsupportedMethod {
                method: self.method.name().to_string(),
                dimensions: self.dimensions,
            });
        }
        Ok(())
    }

    fn read_data(&self) -> Result<Vec<DataPoint>> {
        if self.input == "-" {
            debug!("reading data from stdin");
            read_gnuplot_data(io::stdin().lock())
        } else {
            debug!(path = %self.input, "reading data file");
            read_gnuplot_file(&self.input)
        }
    }

    /// Integrate already parsed data
    pub fn integrate(&self, data: &[DataPoint]) -> Result<Outcome> {
        self.check_method()?;

        match self.dimensions {
            1 => {
                let (x, y) = extract_1d(data);
                if !self.batch {
                    info!(samples = x.len(), method = %self.method, "integrating 1D data");
                }
                let table = Tabulated1D::new(self.method, &x, &y)?;
                if self.indefinite {
                    Ok(Outcome::Running(table.running_integral()?))
                } else {
                    Ok(Outcome::Definite(table.integrate()?))
                }
            }
            2 => {
                if self.indefinite {
                    return Err(IntegrateError::IndefiniteUnsupported);
                }
                let (x, y, z) = extract_2d(data);
                if !self.batch {
                    info!(nx = x.len(), ny = y.len(), method = %self.method, "integrating 2D data");
                }
                Ok(Outcome::Definite(integrate_tabulated_2d(self.method, &x, &y, &z)?))
            }
            dimensions => Err(IntegrateError::InvalidDimensions(dimensions)),
        }
    }

    /// Write `outcome` as plain text or JSON
    pub fn render<W: Write>(&self, outcome: &Outcome, points: usize, out: &mut W) -> Result<()> {
        if self.json {
            let response = self.response(outcome, points);
            writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
            return Ok(());
        }

        match outcome {
            Outcome::Definite(value) => writeln!(out, "{}", format_value(*value, self.precision))?,
            Outcome::Running(values) => {
                for (x, sum) in values {
                    writeln!(
                        out,
                        "{} {}",
                        format_value(*x, self.precision),
                        format_value(*sum, self.precision)
                    )?;
                }
            }
        }
        Ok(())
    }

    fn response(&self, outcome: &Outcome, points: usize) -> IntegrateResponse {
        let (value, running) = match outcome {
            Outcome::Definite(value) => (Some(*value), None),
            Outcome::Running(values) => (
                None,
                Some(
                    values
                        .iter()
                        .map(|&(x, integral)| RunningValue { x, integral })
                        .collect(),
                ),
            ),
        };

        IntegrateResponse {
            status: "success".to_string(),
            method: self.method,
            dimensions: self.dimensions,
            points,
            value,
            running,
        }
    }
}

/// Format `value` with `precision` significant digits
pub fn format_value(value: f64, precision: Option<usize>) -> String {
    let Some(digits) = precision else {
        return value.to_string();
    };
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }

    let decimals = decimals_for(value, digits);
    let formatted = format!("{value:.decimals$}");

    // rounding may carry into a new leading digit, 9.9996 -> 10.00
    match formatted.parse::<f64>() {
        Ok(rounded) if decimals > 0 && decimals_for(rounded, digits) < decimals => {
            let decimals = decimals_for(rounded, digits);
            format!("{value:.decimals$}")
        }
        _ => formatted,
    }
}

/// Decimal places that leave `digits` significant digits in `value`
fn decimals_for(value: f64, digits: usize) -> usize {
    #[allow(clippy::cast_possible_truncation)]
    let magnitude = value.abs().log10().floor() as i64;
    usize::try_from(i64::try_from(digits).unwrap_or(i64::MAX) - 1 - magnitude).unwrap_or(0)
}
