//! PGD calculator - the engine's top-level entry point.

use thiserror::Error;

use super::chart::Chart;
use super::matrix::Matrix;
use super::profile::Profile;
use super::registry::{
    has_business_periods, ANCESTRAL_REGISTRY, BUSINESS_PERIODS_REGISTRY, CROSSROADS_REGISTRY,
    MAIN_CUP_REGISTRY, TASKS_REGISTRY,
};
use super::subject::Subject;
use crate::domain::foundation::{ConfigurationError, ValidationError};

/// Failure modes of a profile computation.
///
/// Validation failures are user input problems and surface at the
/// boundary; configuration failures are packaging bugs in a formula
/// registry and must abort the computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Stateless calculator assembling a [`Profile`] from a [`Subject`].
///
/// The whole computation is a pure function of the subject: the chart
/// is derived once, every registry is evaluated against it, and the
/// matrices are aggregated in one call.
#[derive(Debug, Clone, Copy, Default)]
pub struct PgdCalculator;

impl PgdCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Computes the full profile for a validated subject.
    pub fn compute(&self, subject: &Subject) -> Result<Profile, ConfigurationError> {
        let chart = Chart::derive(subject.date_of_birth(), subject.sex());

        let main_cup = Matrix::build(MAIN_CUP_REGISTRY, &chart)?;
        let ancestral_data = Matrix::build(ANCESTRAL_REGISTRY, &chart)?;
        let crossroads = Matrix::build(CROSSROADS_REGISTRY, &chart)?;
        let tasks = Matrix::build(TASKS_REGISTRY, &chart)?;
        let business_periods = if has_business_periods(&chart) {
            Some(Matrix::build(BUSINESS_PERIODS_REGISTRY, &chart)?)
        } else {
            None
        };

        Ok(Profile::new(
            main_cup,
            ancestral_data,
            crossroads,
            tasks,
            business_periods,
        ))
    }
}

/// Computes a profile straight from wire strings.
///
/// This is the published library entry point: parse, derive, assemble.
pub fn compute_profile(
    date_of_birth: &str,
    sex: &str,
    full_name: Option<&str>,
) -> Result<Profile, EngineError> {
    let subject = Subject::parse(date_of_birth, sex, full_name)?;
    let profile = PgdCalculator::new().compute(&subject)?;
    Ok(profile)
}
