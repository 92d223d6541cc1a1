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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid content fetch timeout")]
    InvalidFetchTimeout,

    #[error("Content URL must use http or https")]
    InvalidContentUrl,

    #[error("Invalid site setting: {0}")]
    InvalidSiteSetting(&'static str),

    #[error("Submit delay must be shorter than the request timeout")]
    SubmitDelayExceedsTimeout,
}
