//! Configuration management for teleportation runs.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML)
//! 2. Environment variables (with QTELE_ prefix)
//! 3. .env files
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file
//! 3. Default values

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Shots per run when nothing else is configured.
pub const DEFAULT_SHOTS: u32 = 1024;

/// Complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeleportConfig {
    /// Shots per run
    #[serde(default = "default_shots")]
    pub shots: u32,

    /// Directory for result files written without an explicit path
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Simulator RNG seed; unset means fresh entropy per run
    #[serde(default)]
    pub seed: Option<u64>,

    /// Simulator qubit limit
    #[serde(default = "default_max_qubits")]
    pub max_qubits: u32,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_shots() -> u32 {
    DEFAULT_SHOTS
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_max_qubits() -> u32 {
    20
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for TeleportConfig {
    fn default() -> Self {
        TeleportConfig {
            shots: default_shots(),
            output_dir: default_output_dir(),
            seed: None,
            max_qubits: default_max_qubits(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
        }
    }
}

impl TeleportConfig {
    /// Default configuration file, `~/.qtele/config.yaml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".qtele").join("config.yaml"))
    }

    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(format!("{}: {e}", path.as_ref().display())))?;

        let config: TeleportConfig = serde_yaml_ng::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with the following precedence:
    /// 1. Load .env file if it exists
    /// 2. Load from `config_file`, or from [`Self::default_path`] if that exists
    /// 3. Apply environment variable overrides
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => {
                    debug!("Using config file {}", path.display());
                    Self::from_file(path)?
                }
                None => TeleportConfig::default(),
            },
        };

        let config = config.merge_env();
        config.validate()?;
        Ok(config)
    }

    /// Merge process environment variables into this configuration.
    pub fn merge_env(self) -> Self {
        self.merge_env_with(|key| std::env::var(key).ok())
    }

    /// Merge overrides from `lookup` into this configuration.
    ///
    /// Only keys that `lookup` returns override the current values.
    /// Numeric values that fail to parse are ignored.
    pub fn merge_env_with<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("QTELE_SHOTS").and_then(|v| v.parse().ok()) {
            self.shots = val;
        }
        if let Some(v) = lookup("QTELE_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(v);
        }
        if let Some(val) = lookup("QTELE_SEED").and_then(|v| v.parse().ok()) {
            self.seed = Some(val);
        }
        if let Some(val) = lookup("QTELE_MAX_QUBITS").and_then(|v| v.parse().ok()) {
            self.max_qubits = val;
        }
        if let Some(v) = lookup("QTELE_LOG_LEVEL") {
            self.logging.level = v;
        }

        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shots == 0 {
            return Err(ConfigError::ValidationError(
                "shots must be greater than 0".to_string(),
            ));
        }

        if !(3..=30).contains(&self.max_qubits) {
            return Err(ConfigError::ValidationError(format!(
                "max_qubits must be between 3 and 30, got {}",
                self.max_qubits
            )));
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: {other}"
                )));
            }
        }

        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
