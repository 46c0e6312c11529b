//! Skills extraction - pure keyword analysis of resume text.
//!
//! Document parsing and storage live outside this crate; the input here
//! is already plain text. Extraction is deterministic: fixed
//! catalogues, whole-word matching, sorted output.

mod breakdown;
mod catalogue;
mod extractor;

pub use breakdown::SkillsBreakdown;
pub use catalogue::{HARD_SKILL_KEYWORDS, SOFT_SKILL_KEYWORDS};
pub use extractor::{ExtractedSkills, SkillExtractor};
