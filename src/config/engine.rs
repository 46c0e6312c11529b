//! PGD engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::{DEFAULT_MIN_YEAR, MAX_YEAR};

/// Engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Lowest birth year accepted by date validation
    #[serde(default = "default_min_birth_year")]
    pub min_birth_year: u16,
}

impl EngineConfig {
    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_birth_year < 1000 || self.min_birth_year > MAX_YEAR {
            return Err(ValidationError::InvalidMinBirthYear);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_birth_year: default_min_birth_year(),
        }
    }
}

fn default_min_birth_year() -> u16 {
    DEFAULT_MIN_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_config_default_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.min_birth_year, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn engine_config_rejects_short_year() {
        let config = EngineConfig { min_birth_year: 999 };
        assert!(config.validate().is_err());
    }
}
