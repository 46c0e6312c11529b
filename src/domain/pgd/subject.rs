//! Analysis subject - the validated input triple of the engine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BirthDate, FullName, Sex, ValidationError, DEFAULT_MIN_YEAR};

/// The person a profile is computed for.
///
/// A subject fully determines its profile: same subject, same profile,
/// bit for bit. The full name identifies the subject and is echoed into
/// reports; no cell formula consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subject {
    date_of_birth: BirthDate,
    sex: Sex,
    full_name: Option<FullName>,
}

impl Subject {
    /// Creates a subject from already validated parts.
    pub fn new(date_of_birth: BirthDate, sex: Sex) -> Self {
        Self {
            date_of_birth,
            sex,
            full_name: None,
        }
    }

    /// Attaches a full name.
    pub fn with_full_name(mut self, full_name: FullName) -> Self {
        self.full_name = Some(full_name);
        self
    }

    /// Parses a subject from wire strings with the default year floor.
    pub fn parse(
        date_of_birth: &str,
        sex: &str,
        full_name: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Self::parse_with_min_year(date_of_birth, sex, full_name, DEFAULT_MIN_YEAR)
    }

    /// Parses a subject from wire strings, bounding the birth year.
    pub fn parse_with_min_year(
        date_of_birth: &str,
        sex: &str,
        full_name: Option<&str>,
        min_year: u16,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            date_of_birth: BirthDate::parse_with_min_year(date_of_birth, min_year)?,
            sex: Sex::parse(sex)?,
            full_name: full_name.map(FullName::try_new).transpose()?,
        })
    }

    /// The validated birth date.
    pub fn date_of_birth(&self) -> BirthDate {
        self.date_of_birth
    }

    /// The recorded sex.
    pub fn sex(&self) -> Sex {
        self.sex
    }

    /// The full name, when one was supplied.
    pub fn full_name(&self) -> Option<&FullName> {
        self.full_name.as_ref()
    }
}
