//! Narrative - the AI-produced analysis text split into sections.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Section headings that open the recommendations part, in priority
/// order. Russian forms first because the narrator writes Russian.
const RECOMMENDATION_HEADINGS: &[&str] =
    &["РЕКОМЕНДАЦИИ", "РЕКОМЕНДАЦИЯ", "DEVELOPMENT", "RECOMMENDATIONS"];

static HEADING_MATCHERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    RECOMMENDATION_HEADINGS
        .iter()
        .map(|heading| {
            Regex::new(&format!("(?i){}", heading)).unwrap_or_else(|err| {
                panic!("invalid heading matcher for '{}': {}", heading, err)
            })
        })
        .collect()
});

/// A career narrative split into insights and recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub insights: String,
    pub recommendations: String,
    pub full_text: String,
}

impl Narrative {
    /// Splits a full analysis text at the first recommendation heading.
    ///
    /// Headings are tried in priority order, case-insensitively. When
    /// none is present the text is cut at two thirds of its characters.
    /// Both parts are trimmed; the full text is kept verbatim.
    pub fn split(full_text: &str) -> Self {
        let at = HEADING_MATCHERS
            .iter()
            .find_map(|matcher| matcher.find(full_text).map(|m| m.start()))
            .unwrap_or_else(|| two_thirds_boundary(full_text));

        let (insights, recommendations) = full_text.split_at(at);
        Self {
            insights: insights.trim().to_string(),
            recommendations: recommendations.trim().to_string(),
            full_text: full_text.to_string(),
        }
    }
}

/// Byte offset of the character two thirds into the text.
fn two_thirds_boundary(text: &str) -> usize {
    let char_count = text.chars().count();
    let split_char = (char_count as f64 * 0.66) as usize;
    text.char_indices()
        .nth(split_char)
        .map(|(index, _)| index)
        .unwrap_or(text.len())
}
