//! Analysis service - orchestrates one career analysis end to end.
//!
//! parse -> compute -> extract skills -> narrate -> assemble -> persist.
//! The service owns no domain logic; it wires the pure engine to the
//! narrator and repository ports.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::domain::foundation::{ConfigurationError, ValidationError, DEFAULT_MIN_YEAR};
use crate::domain::pgd::{PgdCalculator, Profile, Subject};
use crate::domain::report::{AnalysisReport, CareerTrack, Narrative};
use crate::domain::skills::{SkillExtractor, SkillsBreakdown};
use crate::ports::{
    AnalysisNarrator, AnalysisRepository, NarrationError, NarrationRequest, RepositoryError,
};

use super::profile_cache::ProfileCache;

/// Default character budget for the resume excerpt in the prompt.
pub const DEFAULT_MAX_RESUME_CHARS: usize = 4000;

/// Model label requested from the narrator when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// One analysis request as received from the caller.
#[derive(Debug, Clone)]
pub struct AnalysisCommand {
    /// Birth date in `DD.MM.YYYY`.
    pub date_of_birth: String,
    /// Sex token, `M`/`F` (Cyrillic forms accepted).
    pub sex: String,
    /// Optional full name, echoed into the report.
    pub full_name: Option<String>,
    /// Resume text already extracted from the uploaded document.
    pub resume_text: Option<String>,
}

/// Failures of the analysis pipeline.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Narration(#[from] NarrationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Orchestrates profile computation, narration, and persistence.
pub struct AnalysisService {
    calculator: PgdCalculator,
    narrator: Arc<dyn AnalysisNarrator>,
    repository: Arc<dyn AnalysisRepository>,
    cache: Option<ProfileCache>,
    max_resume_chars: usize,
    min_birth_year: u16,
    model: String,
}

impl AnalysisService {
    pub fn new(
        narrator: Arc<dyn AnalysisNarrator>,
        repository: Arc<dyn AnalysisRepository>,
    ) -> Self {
        Self {
            calculator: PgdCalculator::new(),
            narrator,
            repository,
            cache: None,
            max_resume_chars: DEFAULT_MAX_RESUME_CHARS,
            min_birth_year: DEFAULT_MIN_YEAR,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Builds a service configured from the loaded [`AppConfig`].
    pub fn from_config(
        config: &AppConfig,
        narrator: Arc<dyn AnalysisNarrator>,
        repository: Arc<dyn AnalysisRepository>,
    ) -> Self {
        let service = Self::new(narrator, repository)
            .with_max_resume_chars(config.narration.max_resume_chars)
            .with_model(config.narration.model.clone())
            .with_min_birth_year(config.engine.min_birth_year);
        if config.cache.enabled {
            service.with_cache(config.cache.capacity)
        } else {
            service
        }
    }

    /// Enables profile memoization with the given capacity.
    pub fn with_cache(mut self, capacity: usize) -> Self {
        self.cache = Some(ProfileCache::new(capacity));
        self
    }

    /// Overrides the resume excerpt budget.
    pub fn with_max_resume_chars(mut self, max_chars: usize) -> Self {
        self.max_resume_chars = max_chars;
        self
    }

    /// Overrides the birth-year floor applied to incoming dates.
    pub fn with_min_birth_year(mut self, min_year: u16) -> Self {
        self.min_birth_year = min_year;
        self
    }

    /// Overrides the model label sent to the narrator.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Runs one full analysis and persists the resulting report.
    pub async fn analyze(&self, command: AnalysisCommand) -> Result<AnalysisReport, AnalysisError> {
        let subject = Subject::parse_with_min_year(
            &command.date_of_birth,
            &command.sex,
            command.full_name.as_deref(),
            self.min_birth_year,
        )?;
        debug!(date_of_birth = %subject.date_of_birth(), sex = %subject.sex(), "Analysis requested");

        let profile = self.profile_for(&subject)?;

        let skills = command
            .resume_text
            .as_deref()
            .map(SkillExtractor::extract);
        if let Some(extracted) = &skills {
            debug!(
                hard = extracted.hard_skills.len(),
                soft = extracted.soft_skills.len(),
                "Skills extracted from resume"
            );
        }

        let request = NarrationRequest::build(
            &subject,
            &profile,
            skills.as_ref(),
            command.resume_text.as_deref(),
            self.max_resume_chars,
            &self.model,
        );
        let full_text = self.narrator.narrate(request).await.map_err(|err| {
            warn!(error = %err, retryable = err.is_retryable(), "Narration failed");
            err
        })?;
        let narrative = Narrative::split(&full_text);
        let tracks = CareerTrack::parse_all(&full_text);

        let breakdown = skills.map(SkillsBreakdown::from_extracted).unwrap_or_default();
        let mut report = AnalysisReport::new(subject, profile, breakdown, narrative);
        if !tracks.is_empty() {
            debug!(tracks = tracks.len(), "Career tracks parsed from narration");
            report = report.with_career_tracks(tracks);
        }
        self.repository.save(&report).await?;

        info!(analysis_id = %report.id, "Analysis report persisted");
        Ok(report)
    }

    /// Computes the profile, consulting the memo when one is enabled.
    fn profile_for(&self, subject: &Subject) -> Result<Profile, ConfigurationError> {
        if let Some(cache) = &self.cache {
            if let Some(profile) = cache.get(subject) {
                debug!("Profile served from cache");
                return Ok(profile);
            }
            let profile = self.calculator.compute(subject)?;
            cache.insert(subject.clone(), profile.clone());
            return Ok(profile);
        }
        self.calculator.compute(subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryAnalysisRepository, MockNarrator};

    fn command(date: &str, resume: Option<&str>) -> AnalysisCommand {
        AnalysisCommand {
            date_of_birth: date.to_string(),
            sex: "M".to_string(),
            full_name: Some("Ivan Sidorov".to_string()),
            resume_text: resume.map(|s| s.to_string()),
        }
    }

    fn service(narrator: MockNarrator) -> (AnalysisService, Arc<InMemoryAnalysisRepository>) {
        let repository = Arc::new(InMemoryAnalysisRepository::new());
        let service = AnalysisService::new(Arc::new(narrator), repository.clone());
        (service, repository)
    }

    #[tokio::test]
    async fn analyze_persists_a_complete_report() {
        let narrator = MockNarrator::new().with_text("Анализ. РЕКОМЕНДАЦИИ: учитесь.");
        let (service, repository) = service(narrator);

        let report = service
            .analyze(command("15.05.1990", Some("python and leadership")))
            .await
            .unwrap();

        assert_eq!(report.subject.date_of_birth().to_string(), "15.05.1990");
        assert_eq!(report.skills.hard_skills, vec!["Python"]);
        assert_eq!(report.narrative.insights, "Анализ.");
        assert!(report.narrative.recommendations.starts_with("РЕКОМЕНДАЦИИ"));
        assert_eq!(repository.count(), 1);
    }

    #[tokio::test]
    async fn analyze_without_resume_skips_skills() {
        let (service, _repository) = service(MockNarrator::new().with_text("Текст."));

        let report = service.analyze(command("15.05.1990", None)).await.unwrap();

        assert!(report.skills.is_empty());
        assert_eq!(report.skills.balance_ratio, "0/0");
    }

    #[tokio::test]
    async fn analyze_rejects_invalid_input_before_narration() {
        let narrator = MockNarrator::new();
        let (service, repository) = service(narrator.clone());

        let result = service.analyze(command("30.02.2000", None)).await;

        assert!(matches!(result, Err(AnalysisError::Validation(_))));
        assert_eq!(narrator.call_count(), 0);
        assert_eq!(repository.count(), 0);
    }

    #[tokio::test]
    async fn analyze_surfaces_narration_failures() {
        let narrator = MockNarrator::new().with_error(NarrationError::EmptyCompletion);
        let (service, repository) = service(narrator);

        let result = service.analyze(command("15.05.1990", None)).await;

        assert!(matches!(
            result,
            Err(AnalysisError::Narration(NarrationError::EmptyCompletion))
        ));
        assert_eq!(repository.count(), 0);
    }

    #[tokio::test]
    async fn analyze_clips_resume_for_the_narrator() {
        let narrator = MockNarrator::new().with_text("ok");
        let repository = Arc::new(InMemoryAnalysisRepository::new());
        let service = AnalysisService::new(Arc::new(narrator.clone()), repository)
            .with_max_resume_chars(10);

        let long_resume = "a".repeat(100);
        service
            .analyze(command("15.05.1990", Some(&long_resume)))
            .await
            .unwrap();

        let excerpt = narrator.requests()[0].resume_excerpt.clone().unwrap();
        assert_eq!(excerpt.chars().count(), 10);
    }

    #[tokio::test]
    async fn analyze_parses_career_tracks_out_of_narration() {
        let narration = "Анализ профиля.\n\n\
            ### ТРЕК 1: Аналитик данных\n\
            **Match Score: 85%**\n\
            **Описание:** Работа с данными.\n\
            **Сильные стороны:** Логика, системность\n\
            **Развивать:** Публичные выступления\n";
        let (service, repository) = service(MockNarrator::new().with_text(narration));

        let report = service.analyze(command("15.05.1990", None)).await.unwrap();

        let tracks = report.career_tracks.expect("narration carried a track");
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title, "Аналитик данных");
        assert_eq!(tracks[0].match_score, 85.0);
        assert_eq!(tracks[0].key_strengths, vec!["Логика", "системность"]);
        assert_eq!(repository.count(), 1);
    }

    #[tokio::test]
    async fn analyze_leaves_tracks_unset_for_plain_narration() {
        let (service, _repository) =
            service(MockNarrator::new().with_text("Анализ без структурированных треков."));

        let report = service.analyze(command("15.05.1990", None)).await.unwrap();

        assert!(report.career_tracks.is_none());
    }

    #[tokio::test]
    async fn from_config_applies_narration_engine_and_cache_settings() {
        let mut config = AppConfig::default();
        config.narration.max_resume_chars = 10;
        config.narration.model = "test-model".to_string();
        config.engine.min_birth_year = 1900;
        config.cache.enabled = true;
        config.cache.capacity = 8;

        let narrator = MockNarrator::new().with_text("ok");
        let repository = Arc::new(InMemoryAnalysisRepository::new());
        let service =
            AnalysisService::from_config(&config, Arc::new(narrator.clone()), repository);

        let rejected = service.analyze(command("15.05.1890", None)).await;
        assert!(matches!(rejected, Err(AnalysisError::Validation(_))));
        assert_eq!(narrator.call_count(), 0);

        let long_resume = "a".repeat(100);
        service
            .analyze(command("15.05.1990", Some(&long_resume)))
            .await
            .unwrap();

        let request = &narrator.requests()[0];
        assert_eq!(request.model, "test-model");
        assert_eq!(request.resume_excerpt.as_ref().unwrap().chars().count(), 10);
    }

    #[tokio::test]
    async fn analyze_with_cache_computes_each_subject_once() {
        let narrator = MockNarrator::new();
        let repository = Arc::new(InMemoryAnalysisRepository::new());
        let service =
            AnalysisService::new(Arc::new(narrator), repository.clone()).with_cache(16);

        let first = service.analyze(command("15.05.1990", None)).await.unwrap();
        let second = service.analyze(command("15.05.1990", None)).await.unwrap();

        // Same profile value either way; the reports differ only by id
        // and timestamp.
        assert_eq!(first.profile, second.profile);
        assert_ne!(first.id, second.id);
        assert_eq!(repository.count(), 2);
    }
}
