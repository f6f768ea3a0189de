//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/ted-telemetry/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/ted-telemetry/` (~/.config/ted-telemetry/)
//! - State/Logs: `$XDG_STATE_HOME/ted-telemetry/` (~/.local/state/ted-telemetry/)
//!
//! The telemetry log itself is written by the editor into the platform
//! user-data directory (`%AppData%` on Windows), not into an XDG directory.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application identifier the editor uses for its data directory.
pub const EDITOR_APP_ID: &str = "com.tomlin7.ted";

/// File name of the editor's telemetry log.
pub const TELEMETRY_FILE_NAME: &str = "telemetry.jsonl";

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Telemetry log location
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// Report shape
    #[serde(default)]
    pub report: ReportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where to find the editor's telemetry log
#[derive(Debug, Deserialize, Default)]
pub struct TelemetryConfig {
    /// Override path for the telemetry log
    pub log_path: Option<PathBuf>,
}

/// Report configuration
#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    /// Number of entries in each top-N ranking
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
        }
    }
}

fn default_top_n() -> usize {
    5
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        if self.report.top_n == 0 {
            return Err(Error::Config("report.top_n must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Resolve the telemetry log path.
    ///
    /// An explicit override wins, then `telemetry.log_path` from the config
    /// file, then the editor's default location.
    pub fn resolve_log_path(&self, override_path: Option<&Path>) -> PathBuf {
        override_path
            .map(Path::to_path_buf)
            .or_else(|| self.telemetry.log_path.clone())
            .unwrap_or_else(Self::default_log_path)
    }

    /// Returns the editor's default telemetry log path
    ///
    /// `<user data dir>/com.tomlin7.ted/telemetry.jsonl`
    /// (`%AppData%\com.tomlin7.ted\telemetry.jsonl` on Windows)
    pub fn default_log_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| home_dir().join(".local/share"))
            .join(EDITOR_APP_ID)
            .join(TELEMETRY_FILE_NAME)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/ted-telemetry/config.toml` (~/.config/ted-telemetry/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("ted-telemetry").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/ted-telemetry/` (~/.local/state/ted-telemetry/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("ted-telemetry")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/ted-telemetry/ted-telemetry.log`
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("ted-telemetry.log")
    }
}
