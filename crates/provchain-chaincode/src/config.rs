//! Configuration file parsing for the chaincode.
//!
//! Loads the log level and the validation preset from TOML.

use provchain_gatekeeper::ValidationConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Log levels accepted in `log_level`
const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Chaincode configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("Failed to serialize config TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// A field holds an unsupported value
    #[error("Invalid configuration value for {field}: {value}")]
    InvalidValue {
        /// Field name
        field: &'static str,
        /// Rejected value
        value: String,
    },
}

/// Chaincode configuration loaded from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChaincodeConfig {
    /// Default log level; `RUST_LOG` takes precedence (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Validation preset: "default", "permissive" or "strict"
    #[serde(default = "default_validation")]
    pub validation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_validation() -> String {
    "default".to_string()
}

impl Default for ChaincodeConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            validation: default_validation(),
        }
    }
}

impl ChaincodeConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: ChaincodeConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check field values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "log_level",
                value: self.log_level.clone(),
            });
        }
        self.validation_config()?;
        Ok(())
    }

    /// Validation rules for the configured preset
    pub fn validation_config(&self) -> Result<ValidationConfig, ConfigError> {
        ValidationConfig::from_preset(&self.validation).ok_or_else(|| ConfigError::InvalidValue {
            field: "validation",
            value: self.validation.clone(),
        })
    }
}
