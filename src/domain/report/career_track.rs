//! Career track recommendation record, parsed out of narrated text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Opening line of one track section in the narrated analysis.
static TRACK_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"### ТРЕК \d+: ").unwrap_or_else(|err| panic!("invalid track heading: {}", err))
});

/// Field layout of one track block. The narrator is prompted to emit
/// exactly this markdown shape; blocks that deviate are skipped.
static TRACK_FIELDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?s)### ТРЕК \d+: (.+?)\n",
        r"\*\*Match Score: (\d+)%\*\*\n",
        r"\*\*Описание:\*\* (.+?)\n",
        r"\*\*Сильные стороны:\*\* (.+?)\n",
        r"\*\*Развивать:\*\* (.+)",
    ))
    .unwrap_or_else(|err| panic!("invalid track field matcher: {}", err))
});

/// One recommended career direction inside an analysis report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerTrack {
    pub title: String,
    pub description: String,
    /// How well the track fits the subject, 0-100.
    pub match_score: f64,
    pub key_strengths: Vec<String>,
    pub development_areas: Vec<String>,
}

impl CareerTrack {
    /// Creates a track, clamping the match score into 0-100.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        match_score: f64,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            match_score: match_score.clamp(0.0, 100.0),
            key_strengths: Vec::new(),
            development_areas: Vec::new(),
        }
    }

    pub fn with_key_strengths(mut self, strengths: Vec<String>) -> Self {
        self.key_strengths = strengths;
        self
    }

    pub fn with_development_areas(mut self, areas: Vec<String>) -> Self {
        self.development_areas = areas;
        self
    }

    /// Parses every track section out of a narrated analysis.
    ///
    /// Sections open with `### ТРЕК N:` and run until the next `###`
    /// heading or the end of the text. Strengths and development areas
    /// are comma-separated lists. Text without track sections yields an
    /// empty vector.
    pub fn parse_all(text: &str) -> Vec<CareerTrack> {
        TRACK_HEADING
            .find_iter(text)
            .map(|heading| {
                let tail = &text[heading.start()..];
                let end = tail[1..].find("\n###").map(|at| at + 1).unwrap_or(tail.len());
                &tail[..end]
            })
            .filter_map(Self::parse_block)
            .collect()
    }

    fn parse_block(block: &str) -> Option<Self> {
        let captures = TRACK_FIELDS.captures(block)?;
        let score = captures[2].parse::<f64>().ok()?;
        Some(
            Self::new(captures[1].trim(), captures[3].trim(), score)
                .with_key_strengths(split_list(&captures[4]))
                .with_development_areas(split_list(&captures[5])),
        )
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|item| item.trim().to_string()).collect()
}
