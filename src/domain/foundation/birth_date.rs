//! Birth date value object with strict calendar validation.

use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Lowest birth year accepted by default.
///
/// Bounding the year keeps digit concatenations at a fixed width and
/// filters out obviously corrupted records.
pub const DEFAULT_MIN_YEAR: u16 = 1000;

/// Highest representable birth year (four digits).
pub const MAX_YEAR: u16 = 9999;

/// A validated calendar date of birth.
///
/// Constructed only through parsing, so every instance holds a real
/// calendar date (leap days included, impossible dates rejected).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthDate {
    day: u8,
    month: u8,
    year: u16,
}

impl BirthDate {
    /// Parses a `DD.MM.YYYY` string with the default year floor.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        Self::parse_with_min_year(text, DEFAULT_MIN_YEAR)
    }

    /// Parses a `DD.MM.YYYY` string, bounding the year to `min_year..=9999`.
    pub fn parse_with_min_year(text: &str, min_year: u16) -> Result<Self, ValidationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("date_of_birth"));
        }

        let (day_token, month_token, year_token) = split_tokens(trimmed)?;
        let day = parse_component(day_token, "day")?;
        let month = parse_component(month_token, "month")?;
        let year = parse_component(year_token, "year")?;

        if !(1..=12).contains(&month) {
            return Err(ValidationError::out_of_range("month", 1, 12, i32::from(month)));
        }
        if !(min_year..=MAX_YEAR).contains(&year) {
            return Err(ValidationError::out_of_range(
                "year",
                i32::from(min_year),
                i32::from(MAX_YEAR),
                i32::from(year),
            ));
        }

        if !(1..=31).contains(&day) {
            return Err(ValidationError::out_of_range("day", 1, 31, i32::from(day)));
        }

        // chrono is the calendar authority: day-for-month and leap rules.
        if NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day)).is_none() {
            let max_day = days_in_month(year, month as u8);
            return Err(ValidationError::out_of_range(
                "day",
                1,
                i32::from(max_day),
                i32::from(day),
            ));
        }

        Ok(Self {
            day: day as u8,
            month: month as u8,
            year,
        })
    }

    /// Day of month, 1-31.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Month of year, 1-12.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Four-digit year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Returns the date as a chrono `NaiveDate`.
    pub fn as_naive_date(&self) -> NaiveDate {
        // Validity was proven at construction.
        NaiveDate::from_ymd_opt(i32::from(self.year), u32::from(self.month), u32::from(self.day))
            .unwrap_or_default()
    }
}

/// Splits `DD.MM.YYYY` into its three fixed-width tokens.
fn split_tokens(text: &str) -> Result<(&str, &str, &str), ValidationError> {
    let mut parts = text.split('.');
    let day = parts.next().unwrap_or_default();
    let month = parts.next().unwrap_or_default();
    let year = parts.next().unwrap_or_default();

    let extra = parts.next().is_some();
    if extra || day.len() != 2 || month.len() != 2 || year.len() != 4 {
        return Err(ValidationError::invalid_format(
            "date_of_birth",
            "expected DD.MM.YYYY",
        ));
    }
    Ok((day, month, year))
}

fn parse_component(token: &str, field: &str) -> Result<u16, ValidationError> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::invalid_format(
            field,
            format!("'{}' is not a number", token),
        ));
    }
    token
        .parse::<u16>()
        .map_err(|_| ValidationError::invalid_format(field, format!("'{}' is not a number", token)))
}

fn days_in_month(year: u16, month: u8) -> u8 {
    for day in (28..=31).rev() {
        if NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), day).is_some() {
            return day as u8;
        }
    }
    28
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}.{:04}", self.day, self.month, self.year)
    }
}

impl FromStr for BirthDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for BirthDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BirthDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        BirthDate::parse(&text).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birth_date_parses_well_formed_input() {
        let date = BirthDate::parse("15.05.1990").unwrap();
        assert_eq!(date.day(), 15);
        assert_eq!(date.month(), 5);
        assert_eq!(date.year(), 1990);
    }

    #[test]
    fn birth_date_accepts_leap_day_in_leap_year() {
        assert!(BirthDate::parse("29.02.2000").is_ok());
        assert!(BirthDate::parse("29.02.2024").is_ok());
    }

    #[test]
    fn birth_date_rejects_leap_day_in_common_year() {
        let result = BirthDate::parse("29.02.1990");
        match result {
            Err(ValidationError::OutOfRange { field, max, actual, .. }) => {
                assert_eq!(field, "day");
                assert_eq!(max, 28);
                assert_eq!(actual, 29);
            }
            other => panic!("Expected day OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn birth_date_rejects_impossible_day_for_month() {
        assert!(BirthDate::parse("30.02.2000").is_err());
        assert!(BirthDate::parse("31.04.2000").is_err());
        assert!(BirthDate::parse("00.05.2000").is_err());
        assert!(BirthDate::parse("32.01.2000").is_err());
    }

    #[test]
    fn birth_date_rejects_out_of_range_month() {
        let result = BirthDate::parse("15.13.1990");
        match result {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "month");
                assert_eq!(actual, 13);
            }
            other => panic!("Expected month OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn birth_date_rejects_year_below_floor() {
        let result = BirthDate::parse("15.05.0999");
        match result {
            Err(ValidationError::OutOfRange { field, min, .. }) => {
                assert_eq!(field, "year");
                assert_eq!(min, 1000);
            }
            other => panic!("Expected year OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn birth_date_honors_custom_year_floor() {
        assert!(BirthDate::parse_with_min_year("15.05.1890", 1900).is_err());
        assert!(BirthDate::parse_with_min_year("15.05.1890", 1800).is_ok());
    }

    #[test]
    fn birth_date_rejects_malformed_text() {
        assert!(BirthDate::parse("").is_err());
        assert!(BirthDate::parse("1990-05-15").is_err());
        assert!(BirthDate::parse("5.5.1990").is_err());
        assert!(BirthDate::parse("15.05.90").is_err());
        assert!(BirthDate::parse("15.05.1990.1").is_err());
        assert!(BirthDate::parse("aa.bb.cccc").is_err());
    }

    #[test]
    fn birth_date_empty_input_reports_empty_field() {
        match BirthDate::parse("   ") {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "date_of_birth"),
            other => panic!("Expected EmptyField, got {:?}", other),
        }
    }

    #[test]
    fn birth_date_displays_in_wire_format() {
        let date = BirthDate::parse("01.01.2001").unwrap();
        assert_eq!(format!("{}", date), "01.01.2001");
    }

    #[test]
    fn birth_date_serde_round_trips_as_string() {
        let date = BirthDate::parse("29.02.2000").unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"29.02.2000\"");

        let back: BirthDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }

    #[test]
    fn birth_date_deserialize_rejects_invalid_date() {
        let result: Result<BirthDate, _> = serde_json::from_str("\"30.02.2000\"");
        assert!(result.is_err());
    }
}
