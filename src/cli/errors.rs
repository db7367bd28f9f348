//! CLI-specific error types

use std::fmt;
use std::io;

use crate::config::ConfigError;
use crate::file::FileError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdout)
    IoError,
    /// Checksum wider than 32 bits
    ChecksumOutOfRange,
    /// File record or checksum error, carrying the domain code
    FileError(&'static str),
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "PROPFILE_CLI_CONFIG_ERROR",
            Self::IoError => "PROPFILE_CLI_IO_ERROR",
            Self::ChecksumOutOfRange => "PROPFILE_CLI_CHECKSUM_OUT_OF_RANGE",
            Self::FileError(code) => *code,
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::config_error(e.to_string())
    }
}

impl From<FileError> for CliError {
    fn from(e: FileError) -> Self {
        Self::new(CliErrorCode::FileError(e.code()), e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_error_keeps_domain_code() {
        let err = CliError::from(FileError::InvalidContent);
        assert_eq!(err.code_str(), "PROPFILE_INVALID_CONTENT");
        assert!(err.to_string().starts_with("PROPFILE_INVALID_CONTENT: "));
    }

    #[test]
    fn test_config_error_code() {
        let err = CliError::from(ConfigError::Invalid("bad".into()));
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
        assert_eq!(err.message(), "Invalid config value: bad");
    }
}
