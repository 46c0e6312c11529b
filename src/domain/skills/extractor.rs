//! Keyword-based skill extraction from resume text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::catalogue::{HARD_SKILL_KEYWORDS, SOFT_SKILL_KEYWORDS};

static HARD_SKILL_MATCHERS: Lazy<Vec<(&'static str, Regex)>> =
    Lazy::new(|| compile_matchers(HARD_SKILL_KEYWORDS));

static SOFT_SKILL_MATCHERS: Lazy<Vec<(&'static str, Regex)>> =
    Lazy::new(|| compile_matchers(SOFT_SKILL_KEYWORDS));

fn compile_matchers(keywords: &[&'static str]) -> Vec<(&'static str, Regex)> {
    keywords
        .iter()
        .map(|&keyword| {
            let pattern = format!(r"\b{}\b", regex::escape(keyword));
            // Catalogue entries are fixed strings; escaping keeps the
            // pattern valid for every one of them.
            let matcher = Regex::new(&pattern)
                .unwrap_or_else(|err| panic!("invalid matcher for '{}': {}", keyword, err));
            (keyword, matcher)
        })
        .collect()
}

/// Skills found in one document, split by catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSkills {
    pub hard_skills: Vec<String>,
    pub soft_skills: Vec<String>,
}

impl ExtractedSkills {
    pub fn is_empty(&self) -> bool {
        self.hard_skills.is_empty() && self.soft_skills.is_empty()
    }
}

/// Whole-word keyword extractor over lowercased text.
pub struct SkillExtractor;

impl SkillExtractor {
    /// Extracts both catalogues from a document's text.
    ///
    /// Matches are title-cased, deduplicated, and sorted; an empty or
    /// skill-free document yields empty lists.
    pub fn extract(text: &str) -> ExtractedSkills {
        let lowered = text.to_lowercase();
        ExtractedSkills {
            hard_skills: Self::match_catalogue(&lowered, &HARD_SKILL_MATCHERS),
            soft_skills: Self::match_catalogue(&lowered, &SOFT_SKILL_MATCHERS),
        }
    }

    fn match_catalogue(lowered: &str, matchers: &[(&'static str, Regex)]) -> Vec<String> {
        let mut found: Vec<String> = matchers
            .iter()
            .filter(|(_, matcher)| matcher.is_match(lowered))
            .map(|(keyword, _)| title_case(keyword))
            .collect();
        found.sort();
        found.dedup();
        found
    }
}

/// Uppercases the first letter of every alphabetic run.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(ch);
            word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extractor_finds_hard_skills_case_insensitively() {
        let skills = SkillExtractor::extract("Senior engineer: PYTHON, Rust and postgresql.");
        assert_eq!(skills.hard_skills, vec!["Postgresql", "Python", "Rust"]);
        assert!(skills.soft_skills.is_empty());
    }

    #[test]
    fn extractor_finds_multi_word_skills() {
        let skills =
            SkillExtractor::extract("Focus on machine learning and project management daily");
        assert_eq!(
            skills.hard_skills,
            vec!["Machine Learning", "Project Management"]
        );
    }

    #[test]
    fn extractor_finds_soft_skills() {
        let skills = SkillExtractor::extract("Known for leadership, empathy and teamwork.");
        assert_eq!(skills.soft_skills, vec!["Empathy", "Leadership", "Teamwork"]);
    }

    #[test]
    fn extractor_requires_whole_words() {
        // "javascript" must not surface "java"; "restaurant" is not "rest".
        let skills = SkillExtractor::extract("javascript developer at a restaurant");
        assert_eq!(skills.hard_skills, vec!["Javascript"]);
    }

    #[test]
    fn extractor_dedupes_repeated_mentions() {
        let skills = SkillExtractor::extract("sql, SQL and more sql");
        assert_eq!(skills.hard_skills, vec!["Sql"]);
    }

    #[test]
    fn extractor_yields_empty_lists_for_plain_text() {
        let skills = SkillExtractor::extract("A short paragraph about gardening.");
        assert!(skills.is_empty());
    }

    #[test]
    fn extractor_handles_empty_input() {
        assert!(SkillExtractor::extract("").is_empty());
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("sql"), "Sql");
    }
}
