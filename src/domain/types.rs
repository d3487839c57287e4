//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (normalized subscriber numbers,
//! well-formed IMEIs, non-empty labels) so that once a value reaches the
//! domain layer it can be treated as trusted.

use std::fmt::{Display, Formatter};

use phonenumber::{Mode, country, parse};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Subscriber number did not parse to a valid E.164 number.
    #[error("invalid msisdn")]
    InvalidMsisdn,
    /// IMEI was not 15 digits or failed its check digit.
    #[error("invalid imei")]
    InvalidImei,
    /// Accounting period was not a `YYYY-MM` value.
    #[error("invalid period")]
    InvalidPeriod,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

/// Normalized subscriber number, digits-only E.164 (`256XXXXXXXXX`).
///
/// Accepts national (`07...`) and international (`+256...`, `256...`) input
/// and normalizes everything to the digits-only form used on the wire.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Msisdn(String);

impl Msisdn {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let raw = value.into();
        let compact: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        if compact.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        // Digits-only international input is common on the wire; restore the
        // plus so the parser does not mistake it for a national number.
        let candidate = if compact.starts_with("256") {
            format!("+{compact}")
        } else {
            compact
        };
        let parsed = parse(Some(country::UG), &candidate)
            .map_err(|_| TypeConstraintError::InvalidMsisdn)?;
        if !phonenumber::is_valid(&parsed) {
            return Err(TypeConstraintError::InvalidMsisdn);
        }
        let e164 = parsed.format().mode(Mode::E164).to_string();
        Ok(Self(e164.trim_start_matches('+').to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Msisdn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Msisdn {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Msisdn {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Msisdn> for String {
    fn from(value: Msisdn) -> Self {
        value.0
    }
}

/// Device identity: 15 digits with a valid Luhn check digit.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Imei(String);

impl Imei {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.len() != 15 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TypeConstraintError::InvalidImei);
        }
        if !luhn_valid(&trimmed) {
            return Err(TypeConstraintError::InvalidImei);
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Imei {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Imei {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Imei {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Imei> for String {
    fn from(value: Imei) -> Self {
        value.0
    }
}

fn luhn_valid(digits: &str) -> bool {
    let sum: u32 = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

/// Monthly accounting period in `YYYY-MM` form.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period(String);

impl Period {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        let bytes = trimmed.as_bytes();
        let well_formed = bytes.len() == 7
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[4] == b'-'
            && bytes[5..].iter().all(u8::is_ascii_digit);
        if !well_formed {
            return Err(TypeConstraintError::InvalidPeriod);
        }
        let month: u8 = trimmed[5..].parse().map_err(|_| TypeConstraintError::InvalidPeriod)?;
        if !(1..=12).contains(&month) {
            return Err(TypeConstraintError::InvalidPeriod);
        }
        Ok(Self(trimmed))
    }

    /// Period the given calendar date falls into.
    pub fn of(date: chrono::NaiveDate) -> Self {
        Self(date.format("%Y-%m").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Period {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Period {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn msisdn_normalizes_national_and_international_forms() {
        for input in ["0771234567", "+256771234567", "256 771 234 567"] {
            let msisdn = Msisdn::new(input).expect("valid msisdn");
            assert_eq!(msisdn.as_str(), "256771234567");
        }
    }

    #[test]
    fn msisdn_rejects_garbage() {
        assert!(Msisdn::new("").is_err());
        assert!(Msisdn::new("not-a-number").is_err());
    }

    #[test]
    fn imei_accepts_valid_check_digit() {
        // Reference IMEI with a valid Luhn check digit.
        assert!(Imei::new("490154203237518").is_ok());
        assert_eq!(
            Imei::new("490154203237519"),
            Err(TypeConstraintError::InvalidImei)
        );
        assert_eq!(
            Imei::new("49015420323751"),
            Err(TypeConstraintError::InvalidImei)
        );
    }

    #[test]
    fn period_validates_month_range() {
        assert!(Period::new("2026-07").is_ok());
        assert!(Period::new("2026-13").is_err());
        assert!(Period::new("2026-7").is_err());
        assert_eq!(
            Period::of(chrono::NaiveDate::from_ymd_opt(2026, 7, 12).unwrap()).as_str(),
            "2026-07"
        );
    }
}
