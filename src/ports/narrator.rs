//! Analysis narrator port - interface to the external text generator.
//!
//! The production adapter (a network LLM client) lives outside this
//! crate; tests use the mock adapter. The port hands over a flattened,
//! prompt-ready view of the analysis inputs and receives prose back.

use async_trait::async_trait;

use crate::domain::pgd::{MatrixCell, Profile, Subject};
use crate::domain::skills::ExtractedSkills;

/// Port for turning computed analysis data into narrative text.
#[async_trait]
pub trait AnalysisNarrator: Send + Sync {
    /// Generates the full narrative for one analysis.
    ///
    /// # Errors
    ///
    /// - `Unavailable` when the provider cannot be reached
    /// - `EmptyCompletion` when the provider returns no text
    /// - `Timeout` when the provider exceeds its deadline
    async fn narrate(&self, request: NarrationRequest) -> Result<String, NarrationError>;
}

/// Prompt-ready inputs for one narration call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrationRequest {
    /// Subject name, or empty when the request carried none.
    pub full_name: String,
    /// Birth date in `DD.MM.YYYY`.
    pub date_of_birth: String,
    /// Sex wire label, `M` or `F`.
    pub sex: String,
    /// Human-readable profile section listing every non-null cell.
    pub profile_summary: String,
    /// Skills found in the resume, when one was supplied.
    pub skills: Option<ExtractedSkills>,
    /// Resume text clipped to the configured prompt budget.
    pub resume_excerpt: Option<String>,
    /// Model label the provider should generate with.
    pub model: String,
}

impl NarrationRequest {
    /// Builds a request from the analysis inputs.
    ///
    /// `max_resume_chars` bounds the excerpt in characters, keeping the
    /// prompt within the provider's budget.
    pub fn build(
        subject: &Subject,
        profile: &Profile,
        skills: Option<&ExtractedSkills>,
        resume_text: Option<&str>,
        max_resume_chars: usize,
        model: &str,
    ) -> Self {
        Self {
            full_name: subject
                .full_name()
                .map(|name| name.value().to_string())
                .unwrap_or_default(),
            date_of_birth: subject.date_of_birth().to_string(),
            sex: subject.sex().label().to_string(),
            profile_summary: summarize_profile(profile),
            skills: skills.cloned(),
            resume_excerpt: resume_text.map(|text| clip_chars(text, max_resume_chars)),
            model: model.to_string(),
        }
    }
}

/// Renders the profile as labelled sections of `cell: value` lines,
/// null cells omitted. This is the prompt view, not the wire format.
fn summarize_profile(profile: &Profile) -> String {
    let mut out = String::new();

    push_section(&mut out, "main_cup", profile.main_cup().cells());
    push_section(&mut out, "ancestral_data", profile.ancestral_data().cells());
    push_section(&mut out, "crossroads", profile.crossroads().cells());
    push_section(&mut out, "tasks", profile.tasks().cells());
    if let Some(periods) = profile.business_periods() {
        push_section(&mut out, "business_periods", periods.cells());
    }

    out.trim_end().to_string()
}

fn push_section<C: MatrixCell>(
    out: &mut String,
    title: &str,
    cells: impl Iterator<Item = (C, Option<crate::domain::foundation::Arcanum>)>,
) {
    out.push_str(title);
    out.push_str(":\n");
    for (cell, value) in cells {
        if let Some(value) = value {
            out.push_str(&format!("  {}: {}\n", cell.key(), value));
        }
    }
    out.push('\n');
}

fn clip_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Narration failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NarrationError {
    /// Provider is unreachable or refused the request.
    #[error("narrator unavailable: {message}")]
    Unavailable { message: String },

    /// Provider answered with no usable text.
    #[error("narrator returned an empty completion")]
    EmptyCompletion,

    /// Provider exceeded its deadline.
    #[error("narration timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },
}

impl NarrationError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// True when retrying the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            NarrationError::Unavailable { .. } | NarrationError::Timeout { .. }
        )
    }
}
