//! Sex value object used by sex-dependent matrix cells.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Biological sex as recorded on an analysis request.
///
/// The wire format is `"M"` / `"F"`. Upstream records also carry the
/// Cyrillic letters `М` / `Ж`, so parsing accepts both alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    /// Parses a sex token, accepting Latin and Cyrillic forms.
    pub fn parse(token: &str) -> Result<Self, ValidationError> {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("sex"));
        }
        match trimmed {
            "M" | "m" | "М" | "м" => Ok(Sex::Male),
            "F" | "f" | "Ж" | "ж" => Ok(Sex::Female),
            other => Err(ValidationError::invalid_format(
                "sex",
                format!("'{}' is not one of M, F", other),
            )),
        }
    }

    /// Returns the wire label.
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Sex {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sex_parses_latin_tokens() {
        assert_eq!(Sex::parse("M").unwrap(), Sex::Male);
        assert_eq!(Sex::parse("f").unwrap(), Sex::Female);
    }

    #[test]
    fn sex_parses_cyrillic_tokens() {
        assert_eq!(Sex::parse("М").unwrap(), Sex::Male);
        assert_eq!(Sex::parse("ж").unwrap(), Sex::Female);
    }

    #[test]
    fn sex_parse_trims_whitespace() {
        assert_eq!(Sex::parse(" M ").unwrap(), Sex::Male);
    }

    #[test]
    fn sex_rejects_unknown_token() {
        let result = Sex::parse("X");
        match result {
            Err(ValidationError::InvalidFormat { field, .. }) => assert_eq!(field, "sex"),
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn sex_rejects_empty_token() {
        match Sex::parse("  ") {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "sex"),
            other => panic!("Expected EmptyField, got {:?}", other),
        }
    }

    #[test]
    fn sex_serializes_as_single_letter() {
        assert_eq!(serde_json::to_string(&Sex::Male).unwrap(), "\"M\"");
        assert_eq!(serde_json::to_string(&Sex::Female).unwrap(), "\"F\"");
    }

    #[test]
    fn sex_deserializes_from_wire_label() {
        let sex: Sex = serde_json::from_str("\"F\"").unwrap();
        assert_eq!(sex, Sex::Female);
    }
}
