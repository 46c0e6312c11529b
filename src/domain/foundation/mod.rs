//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the Career Intelligence domain.

mod arcanum;
mod birth_date;
mod errors;
mod full_name;
mod ids;
mod sex;
mod timestamp;

pub use arcanum::{Arcanum, MODULUS};
pub use birth_date::{BirthDate, DEFAULT_MIN_YEAR, MAX_YEAR};
pub use errors::{ConfigurationError, ValidationError};
pub use full_name::FullName;
pub use ids::AnalysisId;
pub use sex::Sex;
pub use timestamp::Timestamp;
