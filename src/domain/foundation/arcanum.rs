//! Arcanum value object (0-21 scale).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use super::ValidationError;

/// Number of arcana; every derived value is folded into `0..MODULUS`.
pub const MODULUS: u16 = 22;

/// A value in the arcana range 0 to 21 inclusive.
///
/// Two-digit values 10 to 21 are meaningful on their own and are never
/// digit-summed further; folding is a plain modulo step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Arcanum(u8);

impl Arcanum {
    /// The zero arcanum.
    pub const ZERO: Self = Self(0);

    /// The highest arcanum.
    pub const MAX: Self = Self(21);

    /// Folds any non-negative value into the arcana range.
    pub fn fold(value: u32) -> Self {
        Self((value % u32::from(MODULUS)) as u8)
    }

    /// Creates an Arcanum, returning an error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if u16::from(value) >= MODULUS {
            return Err(ValidationError::out_of_range(
                "arcanum",
                0,
                i32::from(MODULUS) - 1,
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the additive complement within the arcana cycle.
    ///
    /// `complement(x) = (22 - x) mod 22`, so zero is its own complement.
    pub fn complement(&self) -> Self {
        Self(((MODULUS - u16::from(self.0)) % MODULUS) as u8)
    }

    /// Returns the absolute distance to another arcanum.
    ///
    /// Both operands are below the modulus, so the gap already is too.
    pub fn gap(&self, other: Self) -> Self {
        Self(self.0.abs_diff(other.0))
    }
}

impl Add for Arcanum {
    type Output = Arcanum;

    /// Adds two arcana, folding the sum back into range.
    fn add(self, rhs: Self) -> Self::Output {
        Self::fold(u32::from(self.0) + u32::from(rhs.0))
    }
}

impl fmt::Display for Arcanum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arcanum_fold_is_identity_below_modulus() {
        for v in 0..22u32 {
            assert_eq!(Arcanum::fold(v).value(), v as u8);
        }
    }

    #[test]
    fn arcanum_fold_wraps_at_modulus() {
        assert_eq!(Arcanum::fold(22).value(), 0);
        assert_eq!(Arcanum::fold(23).value(), 1);
        assert_eq!(Arcanum::fold(57).value(), 13);
    }

    #[test]
    fn arcanum_preserves_two_digit_values() {
        // 19 is a valid arcanum and must not be digit-summed to 10.
        assert_eq!(Arcanum::fold(19).value(), 19);
        // digit_sum(1999) = 28 folds to 6, not to 2 + 8.
        assert_eq!(Arcanum::fold(28).value(), 6);
    }

    #[test]
    fn arcanum_try_new_accepts_valid_values() {
        assert!(Arcanum::try_new(0).is_ok());
        assert!(Arcanum::try_new(21).is_ok());
    }

    #[test]
    fn arcanum_try_new_rejects_out_of_range() {
        let result = Arcanum::try_new(22);
        match result {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "arcanum");
                assert_eq!(min, 0);
                assert_eq!(max, 21);
                assert_eq!(actual, 22);
            }
            _ => panic!("Expected OutOfRange error"),
        }
    }

    #[test]
    fn arcanum_add_folds_sum() {
        let a = Arcanum::fold(15);
        let b = Arcanum::fold(9);
        assert_eq!((a + b).value(), 2);
    }

    #[test]
    fn arcanum_complement_of_zero_is_zero() {
        assert_eq!(Arcanum::ZERO.complement(), Arcanum::ZERO);
    }

    #[test]
    fn arcanum_complement_mirrors_value() {
        assert_eq!(Arcanum::fold(20).complement().value(), 2);
        assert_eq!(Arcanum::fold(1).complement().value(), 21);
    }

    #[test]
    fn arcanum_gap_is_symmetric() {
        let d = Arcanum::fold(20);
        let e = Arcanum::fold(2);
        assert_eq!(d.gap(e).value(), 18);
        assert_eq!(e.gap(d).value(), 18);
    }

    #[test]
    fn arcanum_serializes_as_bare_number() {
        let json = serde_json::to_string(&Arcanum::fold(17)).unwrap();
        assert_eq!(json, "17");
    }

    #[test]
    fn arcanum_deserializes_from_bare_number() {
        let a: Arcanum = serde_json::from_str("21").unwrap();
        assert_eq!(a.value(), 21);
    }
}
