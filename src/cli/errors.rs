//! CLI-specific error types
//!
//! Every CLI error ends the run with exit code 1.

use std::fmt;
use std::io;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Invalid command-line arguments
    UsageError,
    /// Configuration file error
    ConfigError,
    /// I/O error writing the report
    IoError,
    /// Data directory absent or not a directory
    DataDirUnavailable,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::UsageError => "ETS_CLI_USAGE_ERROR",
            Self::ConfigError => "ETS_CLI_CONFIG_ERROR",
            Self::IoError => "ETS_CLI_IO_ERROR",
            Self::DataDirUnavailable => "ETS_CLI_DATA_DIR_UNAVAILABLE",
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
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn usage_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::UsageError, msg)
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn data_dir_unavailable(path: impl fmt::Display) -> Self {
        Self::new(
            CliErrorCode::DataDirUnavailable,
            format!("Data directory not found: {}", path),
        )
    }

    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ERROR] {}: {}", self.code.code(), self.message)
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

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
