//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid file name for {0}: must not contain a path separator")]
    InvalidFileName(&'static str),

    #[error("Matrix dimensions must be positive")]
    InvalidMatrixSize,

    #[error("Invalid log filter: {0}")]
    InvalidLogLevel(String),
}
