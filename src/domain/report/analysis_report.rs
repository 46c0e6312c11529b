//! Analysis report - the persisted unit combining profile, skills and
//! narrative for one subject.

use serde::{Deserialize, Serialize};

use super::career_track::CareerTrack;
use super::narrative::Narrative;
use crate::domain::foundation::{AnalysisId, Timestamp};
use crate::domain::pgd::{Profile, Subject};
use crate::domain::skills::SkillsBreakdown;

/// A completed career analysis.
///
/// Everything downstream consumers see: the subject echo, the computed
/// matrices, the skill balance, and the narrated text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub id: AnalysisId,
    pub subject: Subject,
    pub profile: Profile,
    pub skills: SkillsBreakdown,
    pub narrative: Narrative,
    pub career_tracks: Option<Vec<CareerTrack>>,
    pub created_at: Timestamp,
}

impl AnalysisReport {
    /// Assembles a report with a fresh identifier and timestamp.
    pub fn new(
        subject: Subject,
        profile: Profile,
        skills: SkillsBreakdown,
        narrative: Narrative,
    ) -> Self {
        Self {
            id: AnalysisId::new(),
            subject,
            profile,
            skills,
            narrative,
            career_tracks: None,
            created_at: Timestamp::now(),
        }
    }

    pub fn with_career_tracks(mut self, tracks: Vec<CareerTrack>) -> Self {
        self.career_tracks = Some(tracks);
        self
    }
}
