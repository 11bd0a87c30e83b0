//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ConfigValidationError),
}

/// Errors that can occur during configuration validation.
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("Generator base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("Generator timeout must be greater than zero")]
    InvalidTimeout,

    #[error("Generator max_tokens must be greater than zero")]
    InvalidMaxTokens,
}
