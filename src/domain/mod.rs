//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `pgd` - The psychographic matrix calculator
//! - `skills` - Keyword-based skill extraction from resume text
//! - `report` - Narrative text and the persisted analysis record

pub mod foundation;
pub mod pgd;
pub mod report;
pub mod skills;
