//! In-memory analysis repository for tests and local runs.
//!
//! # Security Note
//!
//! This adapter is for **testing only** and should not be used in
//! production. It uses `.expect()` on lock operations which will panic
//! if locks are poisoned.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::AnalysisId;
use crate::domain::report::AnalysisReport;
use crate::ports::{AnalysisRepository, RepositoryError};

/// HashMap-backed repository.
///
/// # Panics
///
/// Methods may panic if internal locks are poisoned. This is acceptable
/// for test code but this adapter should NOT be used in production.
pub struct InMemoryAnalysisRepository {
    reports: RwLock<HashMap<AnalysisId, AnalysisReport>>,
}

impl InMemoryAnalysisRepository {
    pub fn new() -> Self {
        Self {
            reports: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored reports (for test assertions).
    pub fn count(&self) -> usize {
        self.reports
            .read()
            .expect("InMemoryAnalysisRepository: lock poisoned")
            .len()
    }

    /// Clears all stored reports (for test isolation).
    pub fn clear(&self) {
        self.reports
            .write()
            .expect("InMemoryAnalysisRepository: lock poisoned")
            .clear();
    }
}

impl Default for InMemoryAnalysisRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisRepository for InMemoryAnalysisRepository {
    async fn save(&self, report: &AnalysisReport) -> Result<(), RepositoryError> {
        self.reports
            .write()
            .expect("InMemoryAnalysisRepository: lock poisoned")
            .insert(report.id, report.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &AnalysisId,
    ) -> Result<Option<AnalysisReport>, RepositoryError> {
        Ok(self
            .reports
            .read()
            .expect("InMemoryAnalysisRepository: lock poisoned")
            .get(id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<AnalysisReport>, RepositoryError> {
        let mut reports: Vec<AnalysisReport> = self
            .reports
            .read()
            .expect("InMemoryAnalysisRepository: lock poisoned")
            .values()
            .cloned()
            .collect();
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reports)
    }

    async fn delete(&self, id: &AnalysisId) -> Result<(), RepositoryError> {
        let removed = self
            .reports
            .write()
            .expect("InMemoryAnalysisRepository: lock poisoned")
            .remove(id);
        match removed {
            Some(_) => Ok(()),
            None => Err(RepositoryError::not_found(*id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pgd::{compute_profile, Subject};
    use crate::domain::report::Narrative;
    use crate::domain::skills::SkillsBreakdown;

    fn report(date: &str) -> AnalysisReport {
        let subject = Subject::parse(date, "F", None).unwrap();
        let profile = compute_profile(date, "F", None).unwrap();
        AnalysisReport::new(
            subject,
            profile,
            SkillsBreakdown::default(),
            Narrative::split("Insights. RECOMMENDATIONS here."),
        )
    }

    #[tokio::test]
    async fn repository_saves_and_finds_reports() {
        let repo = InMemoryAnalysisRepository::new();
        let stored = report("15.05.1990");

        repo.save(&stored).await.unwrap();

        let found = repo.find_by_id(&stored.id).await.unwrap();
        assert_eq!(found, Some(stored));
    }

    #[tokio::test]
    async fn repository_find_missing_returns_none() {
        let repo = InMemoryAnalysisRepository::new();
        let found = repo.find_by_id(&AnalysisId::new()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn repository_lists_newest_first() {
        let repo = InMemoryAnalysisRepository::new();
        let first = report("01.01.2001");
        let second = report("29.02.2000");
        repo.save(&first).await.unwrap();
        repo.save(&second).await.unwrap();

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed[0].created_at >= listed[1].created_at);
    }

    #[tokio::test]
    async fn repository_delete_removes_report() {
        let repo = InMemoryAnalysisRepository::new();
        let stored = report("15.05.1990");
        repo.save(&stored).await.unwrap();

        repo.delete(&stored.id).await.unwrap();

        assert_eq!(repo.count(), 0);
        assert!(matches!(
            repo.delete(&stored.id).await,
            Err(RepositoryError::NotFound { .. })
        ));
    }
}
