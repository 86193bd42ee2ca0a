//! Configuration management for people.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::display::OutputFormat;
use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "people";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "PEOPLE_";

/// Widest indent accepted for plain output.
pub const MAX_INDENT: usize = 8;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `PEOPLE_`, `__` between sections)
/// 2. TOML config file at `~/.config/people/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display configuration.
    pub display: DisplayConfig,
}

/// Display-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Output format used when none is given on the command line.
    pub format: OutputFormat,
    /// Pretty-print JSON output.
    pub pretty_json: bool,
    /// Number of spaces before each record in plain output.
    pub indent: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            pretty_json: true,
            indent: 2,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);
        debug!("Loading configuration from {}", config_file.display());
        Self::extract(&Self::figment(&config_file, ENV_PREFIX))
    }

    /// Layer defaults, the TOML file and `env_prefix` variables.
    ///
    /// Top-level TOML tables map onto config sections (`[display]` is
    /// `display.*`); they are not figment profiles.
    fn figment(config_file: &Path, env_prefix: &str) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(env_prefix).split("__"))
    }

    fn extract(figment: &Figment) -> Result<Self> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.display.indent > MAX_INDENT {
            return Err(Error::config_validation(format!(
                "display.indent ({}) cannot be greater than {MAX_INDENT}",
                self.display.indent
            )));
        }

        Ok(())
    }

    /// Return a copy of the display settings with `format` overriding the
    /// configured one, if given.
    #[must_use]
    pub fn display_with(&self, format: Option<OutputFormat>) -> DisplayConfig {
        let mut display = self.display.clone();
        if let Some(format) = format {
            display.format = format;
        }
        display
    }
}
