//! Numerological reduction of digit groups into the arcana range.

use serde::{Deserialize, Serialize};

use super::digits::DigitGroup;
use crate::domain::foundation::{Arcanum, MODULUS};

/// How a digit group is collapsed to a single arcanum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReductionPolicy {
    /// Fold the group's positional numeric value.
    Value,
    /// Sum the digits once, then fold the sum.
    ///
    /// The sum is never digit-summed a second time: 1999 gives 28 which
    /// folds to 6, not to 2 + 8.
    DigitSum,
}

/// Pure reducer over digit groups.
pub struct Reducer;

impl Reducer {
    /// Reduces a group under a policy.
    ///
    /// An empty group short-circuits to `None` without touching the
    /// arithmetic; absence is a domain outcome, not zero.
    pub fn reduce(group: &DigitGroup, policy: ReductionPolicy) -> Option<Arcanum> {
        if group.is_empty() {
            return None;
        }

        let raw = match policy {
            ReductionPolicy::Value => group.numeric_value(),
            ReductionPolicy::DigitSum => group.digit_sum(),
        };
        let reduced = Arcanum::fold(raw);
        debug_assert!(u16::from(reduced.value()) < MODULUS);
        Some(reduced)
    }
}
