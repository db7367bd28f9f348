//! Configuration
//!
//! A JSON document; every field is optional:
//!
//! ```json
//! { "default_type": "PROPERTY", "log_enabled": true, "log_min_severity": "INFO" }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::file::FileType;
use crate::observability::{Logger, Severity};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Type given to new files when the caller does not pick one
    #[serde(default = "default_file_type")]
    pub default_type: FileType,

    /// Whether log lines are written at all
    #[serde(default = "default_log_enabled")]
    pub log_enabled: bool,

    /// Lowest severity that is logged
    #[serde(default = "default_log_min_severity")]
    pub log_min_severity: String,
}

fn default_file_type() -> FileType {
    FileType::Property
}
fn default_log_enabled() -> bool {
    true
}
fn default_log_min_severity() -> String {
    "INFO".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_type: default_file_type(),
            log_enabled: default_log_enabled(),
            log_min_severity: default_log_min_severity(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.min_severity()?;
        Ok(())
    }

    /// Parsed `log_min_severity`
    pub fn min_severity(&self) -> Result<Severity, ConfigError> {
        self.log_min_severity
            .parse::<Severity>()
            .map_err(ConfigError::Invalid)
    }

    /// Build the logger this configuration describes
    pub fn logger(&self) -> Result<Logger, ConfigError> {
        Ok(Logger::new(self.log_enabled, self.min_severity()?))
    }
}
