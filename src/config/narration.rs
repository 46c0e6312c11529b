//! Narration configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::{DEFAULT_MAX_RESUME_CHARS, DEFAULT_MODEL};

/// Narration configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NarrationConfig {
    /// Character budget for the resume excerpt passed to the narrator
    #[serde(default = "default_max_resume_chars")]
    pub max_resume_chars: usize,

    /// Model label recorded with generated narratives
    #[serde(default = "default_model")]
    pub model: String,
}

impl NarrationConfig {
    /// Validate narration configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_resume_chars == 0 {
            return Err(ValidationError::InvalidResumeBudget);
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::MissingModelLabel);
        }
        Ok(())
    }
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            max_resume_chars: default_max_resume_chars(),
            model: default_model(),
        }
    }
}

fn default_max_resume_chars() -> usize {
    DEFAULT_MAX_RESUME_CHARS
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}
