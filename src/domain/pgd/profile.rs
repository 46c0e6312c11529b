//! Profile - the immutable aggregate of all computed matrices.

use serde::{Deserialize, Serialize};

use super::cell::{AncestralCell, CrossroadsCell, MainCupCell, PeriodCell, TaskCell};
use super::matrix::Matrix;

/// The complete psychographic profile of one subject.
///
/// Value-equal and fully determined by the input triple; this is the
/// unit handed to persistence and narration. Key names and the
/// integer-or-null typing of every cell are a compatibility contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    main_cup: Matrix<MainCupCell>,
    ancestral_data: Matrix<AncestralCell>,
    crossroads: Matrix<CrossroadsCell>,
    tasks: Matrix<TaskCell>,
    /// Null as a whole when no main-cup value repeats.
    business_periods: Option<Matrix<PeriodCell>>,
}

impl Profile {
    /// Aggregates matrices built from one derivation context.
    pub(crate) fn new(
        main_cup: Matrix<MainCupCell>,
        ancestral_data: Matrix<AncestralCell>,
        crossroads: Matrix<CrossroadsCell>,
        tasks: Matrix<TaskCell>,
        business_periods: Option<Matrix<PeriodCell>>,
    ) -> Self {
        Self {
            main_cup,
            ancestral_data,
            crossroads,
            tasks,
            business_periods,
        }
    }

    pub fn main_cup(&self) -> &Matrix<MainCupCell> {
        &self.main_cup
    }

    pub fn ancestral_data(&self) -> &Matrix<AncestralCell> {
        &self.ancestral_data
    }

    pub fn crossroads(&self) -> &Matrix<CrossroadsCell> {
        &self.crossroads
    }

    pub fn tasks(&self) -> &Matrix<TaskCell> {
        &self.tasks
    }

    pub fn business_periods(&self) -> Option<&Matrix<PeriodCell>> {
        self.business_periods.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pgd::compute_profile;

    #[test]
    fn profile_serializes_with_stable_top_level_keys() {
        let profile = compute_profile("15.05.1990", "M", None).unwrap();
        let json = serde_json::to_value(&profile).unwrap();

        let object = json.as_object().unwrap();
        let keys: Vec<&String> = object.keys().collect();
        assert_eq!(
            keys,
            vec![
                "main_cup",
                "ancestral_data",
                "crossroads",
                "tasks",
                "business_periods"
            ]
        );
    }

    #[test]
    fn profile_round_trips_through_json() {
        let profile = compute_profile("29.02.2000", "F", Some("Anna Petrova")).unwrap();
        let json = serde_json::to_string(&profile).unwrap();
        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn profile_keeps_null_cells_explicit() {
        let profile = compute_profile("15.05.1990", "M", None).unwrap();
        let json = serde_json::to_value(&profile).unwrap();

        // Female-branch cells are null for a male subject, never elided.
        assert!(json["main_cup"].as_object().unwrap().contains_key("M"));
        assert!(json["main_cup"]["M"].is_null());
        assert!(json["main_cup"]["N"].is_null());
        assert_eq!(json["main_cup"]["O"], 11);
        assert_eq!(json["main_cup"]["P"], 19);
    }
}
