//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `narration` - mock narrator (production LLM client is external)
//! - `repository` - in-memory analysis repository

pub mod narration;
pub mod repository;

pub use narration::{MockNarration, MockNarrator};
pub use repository::InMemoryAnalysisRepository;
