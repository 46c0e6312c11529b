//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction and input parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Defects in a cell-formula registry.
///
/// These indicate a packaging or versioning bug, never bad user input.
/// The matrix builder aborts on them rather than emitting a partially
/// wrong profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Registry for matrix '{matrix}' declares {expected} cells but holds {actual} entries")]
    RegistrySize {
        matrix: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Registry for matrix '{matrix}' binds cell '{cell}' {count} times")]
    DuplicateCell {
        matrix: &'static str,
        cell: &'static str,
        count: usize,
    },

    #[error("Registry for matrix '{matrix}' has no formula for cell '{cell}'")]
    MissingCell {
        matrix: &'static str,
        cell: &'static str,
    },
}
