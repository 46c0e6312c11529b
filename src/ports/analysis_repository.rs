//! Analysis repository port - persistence contract for reports.

use async_trait::async_trait;

use crate::domain::foundation::AnalysisId;
use crate::domain::report::AnalysisReport;

/// Repository port for [`AnalysisReport`] persistence.
///
/// Implementations own the storage details; profiles must round-trip
/// losslessly, null cells included.
#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    /// Persists a report.
    ///
    /// # Errors
    ///
    /// - `Storage` on persistence failure
    async fn save(&self, report: &AnalysisReport) -> Result<(), RepositoryError>;

    /// Finds a report by its identifier; `None` when absent.
    async fn find_by_id(&self, id: &AnalysisId) -> Result<Option<AnalysisReport>, RepositoryError>;

    /// Lists all stored reports, newest first.
    async fn list(&self) -> Result<Vec<AnalysisReport>, RepositoryError>;

    /// Deletes a report.
    ///
    /// # Errors
    ///
    /// - `NotFound` when the report does not exist
    /// - `Storage` on persistence failure
    async fn delete(&self, id: &AnalysisId) -> Result<(), RepositoryError>;
}

/// Persistence failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("analysis '{id}' not found")]
    NotFound { id: AnalysisId },

    #[error("storage failure: {message}")]
    Storage { message: String },
}

impl RepositoryError {
    pub fn not_found(id: AnalysisId) -> Self {
        Self::NotFound { id }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AnalysisRepository) {}
    }

    #[test]
    fn repository_error_displays_identifier() {
        let id = AnalysisId::new();
        let err = RepositoryError::not_found(id);
        assert!(err.to_string().contains(&id.to_string()));
    }
}
