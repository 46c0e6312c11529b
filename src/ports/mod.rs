//! Ports - interfaces to external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AnalysisNarrator` - external text generation for reports
//! - `AnalysisRepository` - persistence of analysis reports

mod analysis_repository;
mod narrator;

pub use analysis_repository::{AnalysisRepository, RepositoryError};
pub use narrator::{AnalysisNarrator, NarrationError, NarrationRequest};
