//! Application layer - orchestration over the domain and ports.

mod analysis_service;
mod profile_cache;

pub use analysis_service::{
    AnalysisCommand, AnalysisError, AnalysisService, DEFAULT_MAX_RESUME_CHARS, DEFAULT_MODEL,
};
pub use profile_cache::ProfileCache;
