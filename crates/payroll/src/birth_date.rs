//! Birth date value object.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use bytebank_core::{DomainError, DomainResult, ValueObject};

/// Calendar format accepted by [`BirthDate::to_naive_date`].
pub const BIRTH_DATE_FORMAT: &str = "%d/%m/%Y";

/// Birth date exactly as it was provided (`DD/MM/YYYY`).
///
/// The text is kept verbatim. Only the year is extracted for age computation;
/// a full calendar parse happens only when asked for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BirthDate(String);

impl ValueObject for BirthDate {}

impl BirthDate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Year component: the last `/`-separated token.
    pub fn year(&self) -> DomainResult<i32> {
        let token = self.0.rsplit('/').next().unwrap_or_default().trim();
        token.parse::<i32>().map_err(|e| {
            DomainError::validation(format!("birth year {token:?} in {:?}: {e}", self.0))
        })
    }

    /// Strict parse into a calendar date.
    pub fn to_naive_date(&self) -> DomainResult<NaiveDate> {
        NaiveDate::parse_from_str(self.0.trim(), BIRTH_DATE_FORMAT)
            .map_err(|e| DomainError::validation(format!("birth date {:?}: {e}", self.0)))
    }
}

impl core::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BirthDate {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BirthDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}
