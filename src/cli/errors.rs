//! CLI-specific error types

use std::fmt;
use std::io;

use crate::category::UnknownCategory;
use crate::resolver::{ResolverError, ResolverErrorCode};

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout)
    IoError,
    /// Category argument names no registered category
    UnknownCategory,
    /// Collaborators could not be opened or the listener failed
    BootFailed,
    /// Resolver rejected the answers
    Resolver(ResolverErrorCode),
}

impl CliErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "MATCHUP_CLI_CONFIG_ERROR",
            Self::IoError => "MATCHUP_CLI_IO_ERROR",
            Self::UnknownCategory => "MATCHUP_UNKNOWN_CATEGORY",
            Self::BootFailed => "MATCHUP_CLI_BOOT_FAILED",
            Self::Resolver(code) => code.code(),
        }
    }
}

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

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
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

impl From<UnknownCategory> for CliError {
    fn from(e: UnknownCategory) -> Self {
        Self::new(CliErrorCode::UnknownCategory, e.to_string())
    }
}

impl From<ResolverError> for CliError {
    fn from(e: ResolverError) -> Self {
        Self::new(CliErrorCode::Resolver(e.code()), e.message())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
