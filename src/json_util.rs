//! Serde helpers shared by the response records, and the entry points that
//! turn a JSON tree into records while keeping track of where it failed.
//!
//! Field policy, as spelled out on the records:
//! * plain fields are required and must not be null,
//! * `Option` fields become `None` when absent or null,
//! * `parse_vec` arrays become empty when absent or null,
//! * date/time strings go through [`crate::datetime`].

use std::cell::Cell;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;
use serde_path_to_error::{Path, Segment};

use crate::datetime;
use crate::error::{Error, FormatError, Result, SchemaError, SchemaProblem};

thread_local! {
    // Left behind by the date helpers, picked up by `deserialize_at`.
    static FORMAT_FAILURE: Cell<Option<FormatError>> = const { Cell::new(None) };
}

/// Maps a single JSON object to `T`.
///
/// # Errors
/// Returns a schema or format error if the node does not match `T`.
pub fn parse_record<T: DeserializeOwned>(value: &JsonValue) -> Result<T> {
    deserialize_at(shape_of::<T>(), value)
}

/// Maps a JSON array element-wise to `T`, keeping the order.
///
/// # Errors
/// Returns the first element's error, or a schema error if `value` is not an array.
pub fn parse_records<T: DeserializeOwned>(value: &JsonValue) -> Result<Vec<T>> {
    deserialize_at(shape_of::<T>(), value)
}

/// Deserializes a Vec, using an empty Vec if the field is null.
/// Pair with `#[serde(default)]` for absent fields.
pub fn parse_vec<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(d)?.unwrap_or_default())
}

/// Deserializes a flag the API leaves out (or nulls) when it is not set.
pub fn parse_flag<'de, D>(d: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(d)?.unwrap_or(false))
}

/// Deserializes a `YYYY-MM-DD` date; absent, null or empty means `None`.
pub fn parse_date<'de, D>(d: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    parse_formatted(d, datetime::parse_date)
}

/// Deserializes a `hh:mm:ss` time of day.
pub fn parse_time<'de, D>(d: D) -> Result<Option<NaiveTime>, D::Error>
where
    D: Deserializer<'de>,
{
    parse_formatted(d, datetime::parse_time)
}

/// Deserializes a `YYYY-MM-DDThh:mm:ss` datetime.
pub fn parse_datetime<'de, D>(d: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    parse_formatted(d, datetime::parse_datetime)
}

/// Deserializes a calendar day sent as a midnight datetime.
pub fn parse_date_of_datetime<'de, D>(d: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    parse_formatted(d, datetime::parse_date_of_datetime)
}

fn parse_formatted<'de, D, T>(
    d: D,
    parse: fn(&str, Option<&str>) -> Result<Option<T>, FormatError>,
) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(d)?;
    // The field name is filled in from the path once the error surfaces.
    parse("", raw.as_deref()).map_err(|err| {
        let message = format!(
            "could not parse {:?} (expected format {})",
            err.value, err.expected
        );
        FORMAT_FAILURE.set(Some(err));
        D::Error::custom(message)
    })
}

fn shape_of<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

fn deserialize_at<T: DeserializeOwned>(shape: &'static str, value: &JsonValue) -> Result<T> {
    FORMAT_FAILURE.set(None);
    serde_path_to_error::deserialize(value).map_err(|err| {
        if let Some(mut format) = FORMAT_FAILURE.take() {
            format.field = last_key(err.path()).unwrap_or_default();
            return Error::Format(format);
        }
        schema_error(shape, value, &err).into()
    })
}

fn schema_error(
    shape: &'static str,
    source: &JsonValue,
    err: &serde_path_to_error::Error<serde_json::Error>,
) -> SchemaError {
    let message = err.inner().to_string();
    let path = render_path(err.path());

    // Reported on the enclosing object, so the key is not on the path yet.
    if let Some(missing) = missing_field(&message) {
        return SchemaError {
            shape,
            path: if path.is_empty() {
                missing.to_owned()
            } else {
                format!("{path}.{missing}")
            },
            field: Some(missing.to_owned()),
            problem: SchemaProblem::MissingField,
        };
    }

    let problem = if value_at(source, err.path()).is_some_and(JsonValue::is_null) {
        SchemaProblem::NullField
    } else {
        SchemaProblem::WrongType(message)
    };
    SchemaError {
        shape,
        path: if path.is_empty() { String::from(".") } else { path },
        field: last_key(err.path()),
        problem,
    }
}

fn missing_field(message: &str) -> Option<&str> {
    message.strip_prefix("missing field `")?.strip_suffix('`')
}

fn render_path(path: &Path) -> String {
    let mut rendered = String::new();
    for segment in path.iter() {
        match segment {
            Segment::Seq { index } => rendered.push_str(&format!("[{index}]")),
            Segment::Map { key } => {
                if !rendered.is_empty() {
                    rendered.push('.');
                }
                rendered.push_str(key);
            }
            _ => rendered.push_str(".?"),
        }
    }
    rendered
}

fn value_at<'a>(root: &'a JsonValue, path: &Path) -> Option<&'a JsonValue> {
    path.iter().try_fold(root, |value, segment| match segment {
        Segment::Seq { index } => value.get(*index),
        Segment::Map { key } => value.get(key.as_str()),
        _ => None,
    })
}

fn last_key(path: &Path) -> Option<String> {
    path.iter()
        .filter_map(|segment| match segment {
            Segment::Map { key } => Some(key.clone()),
            _ => None,
        })
        .last()
}
