// Age input model
// Manual text entry or birthdate, resolved into whole calendar years

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use crate::utils::date::whole_years_between;

/// Validation failures while resolving an age input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AgeError {
    /// The manual field did not hold a whole number.
    #[error("age must be a whole number, got '{0}'")]
    InvalidNumber(String),
    #[error("age cannot be negative")]
    NegativeAge,
    #[error("birthdate cannot be in the future")]
    FutureBirthdate,
}

/// A validated age in whole completed years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResolvedAge(pub u32);

impl ResolvedAge {
    pub fn years(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ResolvedAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The active age source. Exactly one variant is in effect at a time;
/// switching sources replaces the input wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgeInput {
    /// Raw text from a manual age field, validated on resolve rather than
    /// on entry.
    Manual(String),
    /// A birthdate the age is derived from, relative to a supplied today.
    Birthdate(NaiveDate),
}

impl AgeInput {
    /// Resolve this input into a validated age as of `today`.
    pub fn resolve(&self, today: NaiveDate) -> Result<ResolvedAge, AgeError> {
        match self {
            AgeInput::Manual(text) => resolve_manual(text),
            AgeInput::Birthdate(birthdate) => resolve_birthdate(*birthdate, today),
        }
    }
}

/// Parse a manual age entry. Leading/trailing whitespace is tolerated;
/// anything that is not a whole number is rejected.
pub fn resolve_manual(text: &str) -> Result<ResolvedAge, AgeError> {
    let trimmed = text.trim();
    let years: i64 = trimmed
        .parse()
        .map_err(|_| AgeError::InvalidNumber(trimmed.to_string()))?;
    if years < 0 {
        return Err(AgeError::NegativeAge);
    }
    let years =
        u32::try_from(years).map_err(|_| AgeError::InvalidNumber(trimmed.to_string()))?;
    Ok(ResolvedAge(years))
}

/// Derive the age from a birthdate in whole completed calendar years. The
/// anniversary rule lives in `whole_years_between`; a birthdate equal to
/// `today` resolves to zero.
pub fn resolve_birthdate(birthdate: NaiveDate, today: NaiveDate) -> Result<ResolvedAge, AgeError> {
    if birthdate > today {
        return Err(AgeError::FutureBirthdate);
    }
    let years = whole_years_between(birthdate, today);
    Ok(ResolvedAge(years as u32))
}
