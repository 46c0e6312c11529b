//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CAREER_INTELLIGENCE_` prefix and nested values use underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use career_intelligence::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Engine accepts years from {}", config.engine.min_birth_year);
//! ```

mod cache;
mod engine;
mod error;
mod narration;

pub use cache::CacheConfig;
pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use narration::NarrationConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the Career Intelligence engine.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Engine configuration (birth year bounds)
    #[serde(default)]
    pub engine: EngineConfig,

    /// Narration configuration (resume budget, model label)
    #[serde(default)]
    pub narration: NarrationConfig,

    /// Profile cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CAREER_INTELLIGENCE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CAREER_INTELLIGENCE__CACHE__ENABLED=true` -> `cache.enabled = true`
    /// - `CAREER_INTELLIGENCE__NARRATION__MAX_RESUME_CHARS=2000` -> `narration.max_resume_chars = 2000`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CAREER_INTELLIGENCE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Performs semantic validation of configuration:
    /// - Birth year bounds
    /// - Resume excerpt budget
    /// - Cache capacity constraints
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.narration.validate()?;
        self.cache.validate()?;
        Ok(())
    }
}
