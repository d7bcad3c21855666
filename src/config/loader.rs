//! Configuration file loading with precedence handling.

use crate::state::DEFAULT_MAX_SUGGESTIONS;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "EDUBROWSE_CONFIG";

/// Environment variable naming the materials table.
pub const SOURCE_ENV_VAR: &str = "EDUBROWSE_SOURCE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/edubrowse/config.toml`.
///
/// ```toml
/// source_path = "/srv/materials/catalog.csv"
/// max_suggestions = 30
/// color = false
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// CSV table to load when no FILE argument is given.
    #[serde(default)]
    pub source_path: Option<PathBuf>,

    /// Maximum autocomplete rows.
    #[serde(default)]
    pub max_suggestions: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Colored output.
    #[serde(default)]
    pub color: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Materials table. `None` until a file, env var, or CLI argument names one.
    pub source_path: Option<PathBuf>,
    /// Maximum autocomplete rows.
    pub max_suggestions: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Colored output.
    pub color: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            source_path: None,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            log_file_path: default_log_path(),
            color: true,
        }
    }
}

/// Overrides taken from explicitly set CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// Positional FILE argument.
    pub source_path: Option<PathBuf>,
    /// `--no-color` given.
    pub no_color: bool,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/edubrowse/edubrowse.log` on Linux, the platform
/// equivalent elsewhere, or `edubrowse.log` in the current directory when no
/// state directory exists.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("edubrowse").join("edubrowse.log"),
        None => PathBuf::from("edubrowse.log"),
    }
}

/// Resolve default config file path.
///
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("edubrowse").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Path precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `EDUBROWSE_CONFIG` environment variable
/// 3. Default path `~/.config/edubrowse/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        source_path: config.source_path.or(defaults.source_path),
        max_suggestions: config
            .max_suggestions
            .unwrap_or(defaults.max_suggestions)
            .max(1),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        color: config.color.unwrap_or(defaults.color),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `EDUBROWSE_SOURCE` for the materials table. Empty values are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(source) = std::env::var(SOURCE_ENV_VAR) {
        if !source.trim().is_empty() {
            config.source_path = Some(PathBuf::from(source));
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. Only flags the user set are applied.
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(path) = cli.source_path {
        config.source_path = Some(path);
    }

    if cli.no_color {
        config.color = false;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
