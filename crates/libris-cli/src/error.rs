//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from configuration and core errors to exit codes.

use libris_core::{ConfigError, CoreError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (bind failure, unreadable `.env`, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Server failed to start or stopped with an error.
    #[error("Server error: {0}")]
    Server(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Config(_) => 78, // EX_CONFIG
            Self::Io(_) => 74,     // EX_IOERR
            Self::Server(_) => 69, // EX_UNAVAILABLE
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Configuration(msg) => Self::Config(msg),
            other => Self::Core(other.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
