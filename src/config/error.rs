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
    #[error("Minimum birth year must be a four-digit year")]
    InvalidMinBirthYear,

    #[error("Resume excerpt budget must be greater than zero")]
    InvalidResumeBudget,

    #[error("Narration model label must not be empty")]
    MissingModelLabel,

    #[error("Cache capacity must be greater than zero when caching is enabled")]
    InvalidCacheCapacity,
}
