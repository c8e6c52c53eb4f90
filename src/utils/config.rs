// Configuration utilities and TOML parsing

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::models::method::Method;
use crate::utils::error::{IntegrateError, Result};

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "integrate.toml";

/// Largest useful number of significant digits for an `f64`
pub const MAX_PRECISION: usize = 17;

/// Settings read from `integrate.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntegrateConfig {
    pub defaults: DefaultsConfig,
    pub output: OutputConfig,
}

/// `[defaults]`: values used when the matching flag is not given
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    pub method: Option<String>,
    pub dimensions: Option<u8>,
}

/// `[output]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Significant digits printed for results
    pub precision: Option<usize>,
    /// Emit JSON instead of plain text
    pub json: bool,
}

impl IntegrateConfig {
    /// The configured default method, if any
    pub fn method(&self) -> Result<Option<Method>> {
        self.defaults
            .method
            .as_deref()
            .map(str::parse)
            .transpose()
    }
}

/// Configuration parsing and validation utilities
pub struct ConfigParser;

impl ConfigParser {
    /// Load and validate a configuration file
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<IntegrateConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(IntegrateError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| IntegrateError::Config(format!("Failed to read {}: {}", path.display(), e)))?;

        debug!(path = %path.display(), "loading configuration");
        Self::parse_config(&content)
    }

    /// Parse configuration from a TOML string and validate it
    pub fn parse_config(content: &str) -> Result<IntegrateConfig> {
        let config: IntegrateConfig =
            toml::from_str(content).map_err(|e| IntegrateError::Config(format!("Invalid TOML syntax: {e}")))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Find and load the configuration to use
    ///
    /// An explicit path must exist. Otherwise `./integrate.toml` is tried,
    /// then the user config directory, and built-in defaults are used when
    /// neither is present.
    pub fn discover(explicit: Option<&Path>) -> Result<IntegrateConfig> {
        if let Some(path) = explicit {
            return Self::load_config(path);
        }

        let candidates = [Some(get_local_config_path()), get_user_config_path()];
        for path in candidates.into_iter().flatten() {
            if path.is_file() {
                return Self::load_config(&path);
            }
        }

        debug!("no configuration file found, using defaults");
        Ok(IntegrateConfig::default())
    }

    /// Check values that TOML typing alone cannot
    pub fn validate(config: &IntegrateConfig) -> Result<()> {
        if let Some(method) = &config.defaults.method {
            if Method::from_prefix(method).is_none() {
                return Err(IntegrateError::Config(format!("Unknown default method: {method}")));
            }
        }

        if let Some(dimensions) = config.defaults.dimensions {
            if !(1..=2).contains(&dimensions) {
                return Err(IntegrateError::Config(format!(
                    "Default dimensions must be 1 or 2, got {dimensions}"
                )));
            }
        }

        if let Some(precision) = config.output.precision {
            if precision == 0 || precision > MAX_PRECISION {
                return Err(IntegrateError::Config(format!(
                    "Output precision must be between 1 and {MAX_PRECISION}, got {precision}"
                )));
            }
        }

        Ok(())
    }
}

pub fn get_local_config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("integrate").join(CONFIG_FILE_NAME))
}
