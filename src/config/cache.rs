//! Profile cache configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Profile cache configuration
///
/// The cache is off by default; computing a profile is cheap enough
/// that memoization only pays off under sustained repeated lookups.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Enable profile memoization
    #[serde(default)]
    pub enabled: bool,

    /// Maximum number of memoized profiles
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl CacheConfig {
    /// Validate cache configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.enabled && self.capacity == 0 {
            return Err(ValidationError::InvalidCacheCapacity);
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            capacity: default_capacity(),
        }
    }
}

fn default_capacity() -> usize {
    1024
}
