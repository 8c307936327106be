//! Sports age.
//!
//! Federations place athletes by the age they reach during the competition
//! year, not by their exact calendar age: an athlete born on 31 December
//! has the same sports age on 1 January as one born on 1 January.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::error::KernelError;

/// Parse an ISO-8601 birth date.
///
/// Accepts plain `YYYY-MM-DD`, RFC 3339 timestamps and naive
/// `YYYY-MM-DDTHH:MM:SS` timestamps (only the date part is kept).
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, KernelError> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(stamp.date_naive());
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Ok(stamp.date());
    }
    Err(KernelError::InvalidDate {
        input: input.to_string(),
    })
}

/// Sports age of an already-parsed birth date.
pub fn sports_age_from_date(birth_date: NaiveDate, reference: NaiveDate) -> i32 {
    reference.year() - birth_date.year()
}

/// Sports age: `reference.year - birth.year`, ignoring month and day.
pub fn sports_age(birth_date_iso: &str, reference: NaiveDate) -> Result<i32, KernelError> {
    let birth_date = parse_birth_date(birth_date_iso)?;
    Ok(sports_age_from_date(birth_date, reference))
}
