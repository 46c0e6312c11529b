//! Reporting types - narrative text and the persisted analysis record.

mod analysis_report;
mod career_track;
mod narrative;

pub use analysis_report::AnalysisReport;
pub use career_track::CareerTrack;
pub use narrative::Narrative;
