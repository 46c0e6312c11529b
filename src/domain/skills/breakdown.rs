//! Skills breakdown - the hard/soft balance handed to reporting.

use serde::{Deserialize, Serialize};

use super::extractor::ExtractedSkills;

/// Hard/soft skill split with share scores and a balance ratio.
///
/// Scores are percentage shares of the matched keyword counts; the
/// ratio string mirrors them as `"soft/hard"` (e.g. `"60/40"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsBreakdown {
    pub soft_skills: Vec<String>,
    pub hard_skills: Vec<String>,
    pub soft_skills_score: f64,
    pub hard_skills_score: f64,
    pub balance_ratio: String,
}

impl SkillsBreakdown {
    /// Scores an extraction result.
    pub fn from_extracted(skills: ExtractedSkills) -> Self {
        let soft_count = skills.soft_skills.len();
        let hard_count = skills.hard_skills.len();
        let total = soft_count + hard_count;

        let (soft_score, hard_score) = if total == 0 {
            (0.0, 0.0)
        } else {
            let soft = (soft_count as f64 / total as f64 * 100.0).round();
            (soft, 100.0 - soft)
        };

        Self {
            soft_skills: skills.soft_skills,
            hard_skills: skills.hard_skills,
            soft_skills_score: soft_score,
            hard_skills_score: hard_score,
            balance_ratio: format!("{}/{}", soft_score as u32, hard_score as u32),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.soft_skills.is_empty() && self.hard_skills.is_empty()
    }
}

impl Default for SkillsBreakdown {
    fn default() -> Self {
        Self::from_extracted(ExtractedSkills::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extracted(hard: &[&str], soft: &[&str]) -> ExtractedSkills {
        ExtractedSkills {
            hard_skills: hard.iter().map(|s| s.to_string()).collect(),
            soft_skills: soft.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn breakdown_scores_are_shares_of_total() {
        let breakdown = SkillsBreakdown::from_extracted(extracted(
            &["Python", "Sql"],
            &["Leadership", "Teamwork", "Empathy"],
        ));

        assert_eq!(breakdown.soft_skills_score, 60.0);
        assert_eq!(breakdown.hard_skills_score, 40.0);
        assert_eq!(breakdown.balance_ratio, "60/40");
    }

    #[test]
    fn breakdown_scores_sum_to_one_hundred() {
        let breakdown =
            SkillsBreakdown::from_extracted(extracted(&["Python", "Sql"], &["Leadership"]));
        assert_eq!(
            breakdown.soft_skills_score + breakdown.hard_skills_score,
            100.0
        );
    }

    #[test]
    fn breakdown_of_nothing_is_all_zero() {
        let breakdown = SkillsBreakdown::default();
        assert!(breakdown.is_empty());
        assert_eq!(breakdown.soft_skills_score, 0.0);
        assert_eq!(breakdown.hard_skills_score, 0.0);
        assert_eq!(breakdown.balance_ratio, "0/0");
    }

    #[test]
    fn breakdown_one_sided_input_scores_full_share() {
        let breakdown = SkillsBreakdown::from_extracted(extracted(&["Rust"], &[]));
        assert_eq!(breakdown.hard_skills_score, 100.0);
        assert_eq!(breakdown.soft_skills_score, 0.0);
        assert_eq!(breakdown.balance_ratio, "0/100");
    }

    #[test]
    fn breakdown_serializes_with_schema_field_names() {
        let breakdown =
            SkillsBreakdown::from_extracted(extracted(&["Python"], &["Leadership"]));
        let json = serde_json::to_value(&breakdown).unwrap();

        assert_eq!(json["soft_skills_score"], 50.0);
        assert_eq!(json["hard_skills_score"], 50.0);
        assert_eq!(json["balance_ratio"], "50/50");
        assert_eq!(json["hard_skills"][0], "Python");
    }
}
