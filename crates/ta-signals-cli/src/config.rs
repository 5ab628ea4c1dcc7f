//! Strategy configuration for the `signals` command.
//!
//! Parameters are layered: defaults, then an optional TOML file, then
//! command-line flags. A file only needs the keys it changes:
//!
//! ```toml
//! slow_window = 26
//! fast_window = 12
//! rsi_window = 14
//! long_entry = 25.0
//! short_entry = 75.0
//! ```

use std::path::Path;

use ta_signals::SignalConfig;

use crate::error::{CliError, Result};

/// Parameter values given on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfigOverrides {
    /// `--slow`
    pub slow_window: Option<usize>,
    /// `--fast`
    pub fast_window: Option<usize>,
    /// `--rsi-window`
    pub rsi_window: Option<usize>,
    /// `--long-entry`
    pub long_entry: Option<f64>,
    /// `--short-entry`
    pub short_entry: Option<f64>,
}

impl ConfigOverrides {
    /// Applies every set override on top of `config`.
    #[must_use]
    pub fn apply(&self, mut config: SignalConfig) -> SignalConfig {
        if let Some(v) = self.slow_window {
            config.slow_window = v;
        }
        if let Some(v) = self.fast_window {
            config.fast_window = v;
        }
        if let Some(v) = self.rsi_window {
            config.rsi_window = v;
        }
        if let Some(v) = self.long_entry {
            config.long_entry = v;
        }
        if let Some(v) = self.short_entry {
            config.short_entry = v;
        }
        config
    }
}

/// Parses a TOML configuration string.
///
/// Missing keys keep their defaults; unknown keys are rejected.
///
/// # Errors
///
/// Returns `CliError::ConfigError` if the TOML is malformed or has
/// unexpected keys or types.
pub fn parse_config(content: &str, path: &str) -> Result<SignalConfig> {
    toml::from_str(content).map_err(|e| CliError::ConfigError {
        message: e.message().to_string(),
        path: path.to_string(),
    })
}

/// Loads a TOML configuration file.
///
/// # Errors
///
/// Returns `CliError::IoError` if the file cannot be read and
/// `CliError::ConfigError` if it cannot be parsed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SignalConfig> {
    let path = path.as_ref();
    let shown = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| CliError::IoError {
        source: e,
        path: Some(shown.clone()),
    })?;
    let config = parse_config(&content, &shown)?;
    tracing::debug!(path = %shown, ?config, "loaded signal config");
    Ok(config)
}

/// Resolves the effective configuration from an optional file and overrides.
///
/// With `strict`, the result must pass [`SignalConfig::validate`].
///
/// # Errors
///
/// Returns the load error, or `CliError::SignalError` if strict validation fails.
pub fn resolve_config(
    path: Option<&str>,
    overrides: &ConfigOverrides,
    strict: bool,
) -> Result<SignalConfig> {
    let base = match path {
        Some(p) => load_config(p)?,
        None => SignalConfig::default(),
    };
    let config = overrides.apply(base);

    if strict {
        config.validate()?;
    } else if let Err(err) = config.validate() {
        tracing::warn!(error = %err, "inconsistent parameters, affected columns will be neutral or empty");
    }

    Ok(config)
}
