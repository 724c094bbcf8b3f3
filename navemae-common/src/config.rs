//! Bootstrap configuration loading
//!
//! Config file resolution follows this priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. Per-user config file (`<config_dir>/navemae/config.toml`)
//! 4. Built-in defaults (fallback)
//!
//! A missing config file is never fatal: the service starts with defaults and
//! warns about it once logging is up.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "NAVEMAE_CONFIG";

/// Default HTTP port of the artist roster service
pub const DEFAULT_PORT: u16 = 5740;

/// Bootstrap configuration loaded from TOML
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TomlConfig {
    /// Base URL of the backend serving `/artists`
    #[serde(default)]
    pub backend_url: Option<String>,

    /// JSON file to read artists from instead of the backend
    #[serde(default)]
    pub fixture_path: Option<PathBuf>,

    /// Address to bind the HTTP server to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Timeout for the backend request, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            fixture_path: None,
            bind_address: default_bind_address(),
            port: default_port(),
            request_timeout_secs: default_request_timeout_secs(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Resolve which config file to read, if any
///
/// Returns `None` when neither the CLI, the environment, nor the per-user
/// config directory points at a file.
pub fn resolve_config_path(cli_arg: Option<&Path>, env_var_name: &str) -> Option<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    // Priority 3: Per-user config file
    dirs::config_dir()
        .map(|d| d.join("navemae").join("config.toml"))
        .filter(|p| p.exists())
}

/// Parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Invalid config file {}: {}", path.display(), e)))
}

/// Where the effective config came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Nothing pointed at a config file
    Defaults,
    /// A config file was named but does not exist; defaults were used
    Missing(PathBuf),
    /// Parsed from this file
    File(PathBuf),
}

/// Loaded config together with its origin
///
/// Loading happens before logging is set up, so the caller reports the origin
/// once a subscriber is installed.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: TomlConfig,
    pub origin: ConfigOrigin,
}

impl LoadedConfig {
    /// Log where the config came from; a missing file is a warning
    pub fn log_origin(&self) {
        match &self.origin {
            ConfigOrigin::Defaults => info!("No config file found, using built-in defaults"),
            ConfigOrigin::Missing(path) => {
                warn!("Config file {} not found, using built-in defaults", path.display())
            }
            ConfigOrigin::File(path) => info!("Loaded config from {}", path.display()),
        }
    }
}

/// Load the config named by the resolution order, falling back to defaults
///
/// An explicitly requested file (CLI or environment) that cannot be parsed is
/// an error; a missing file falls back to defaults.
pub fn load_or_default(cli_arg: Option<&Path>) -> Result<LoadedConfig> {
    let Some(path) = resolve_config_path(cli_arg, CONFIG_ENV_VAR) else {
        return Ok(LoadedConfig {
            config: TomlConfig::default(),
            origin: ConfigOrigin::Defaults,
        });
    };

    if !path.exists() {
        return Ok(LoadedConfig {
            config: TomlConfig::default(),
            origin: ConfigOrigin::Missing(path),
        });
    }

    let config = load_toml_config(&path)?;
    Ok(LoadedConfig {
        config,
        origin: ConfigOrigin::File(path),
    })
}
