//! Conversions between the API's date/time strings and chrono values.
//!
//! All values are naive wall-clock values in the university's local time;
//! nothing here knows about timezones.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::FormatError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses a `YYYY-MM-DD` date. Absent or empty input yields `None`.
///
/// # Errors
/// Returns a [`FormatError`] if the string is present but malformed.
pub fn parse_date(field: &str, raw: Option<&str>) -> Result<Option<NaiveDate>, FormatError> {
    parse_with(field, raw, DATE_FORMAT, NaiveDate::parse_from_str)
}

/// Parses a `hh:mm:ss` time of day. Absent or empty input yields `None`.
///
/// # Errors
/// Returns a [`FormatError`] if the string is present but malformed.
pub fn parse_time(field: &str, raw: Option<&str>) -> Result<Option<NaiveTime>, FormatError> {
    parse_with(field, raw, TIME_FORMAT, NaiveTime::parse_from_str)
}

/// Parses a `YYYY-MM-DDThh:mm:ss` datetime. Absent or empty input yields `None`.
///
/// # Errors
/// Returns a [`FormatError`] if the string is present but malformed.
pub fn parse_datetime(
    field: &str,
    raw: Option<&str>,
) -> Result<Option<NaiveDateTime>, FormatError> {
    parse_with(field, raw, DATETIME_FORMAT, NaiveDateTime::parse_from_str)
}

/// Parses a calendar day that the API encodes as a full datetime at midnight.
///
/// # Errors
/// Returns a [`FormatError`] if the string is present but malformed.
pub fn parse_date_of_datetime(
    field: &str,
    raw: Option<&str>,
) -> Result<Option<NaiveDate>, FormatError> {
    Ok(parse_datetime(field, raw)?.map(|dt| dt.date()))
}

fn parse_with<T, E>(
    field: &str,
    raw: Option<&str>,
    format: &'static str,
    parse: impl FnOnce(&str, &str) -> Result<T, E>,
) -> Result<Option<T>, FormatError> {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    parse(raw, format).map(Some).map_err(|_| FormatError {
        field: field.to_owned(),
        value: raw.to_owned(),
        expected: format,
    })
}

#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[must_use]
pub fn format_datetime(datetime: NaiveDateTime) -> String {
    datetime.format(DATETIME_FORMAT).to_string()
}
