use std::fmt;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("{operation}: response body is not valid JSON")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not complete HTTP request")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid base URL: {0}")]
    BaseUrl(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// The server answered with something other than `200 OK`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "{operation}: the server returned HTTP {status} {reason}. Response body:\n[{body}]"
)]
pub struct ApiError {
    pub operation: &'static str,
    pub status: u16,
    pub reason: String,
    pub body: String,
}

/// A JSON node did not have the structure its record type requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{shape}: {problem} at `{path}`")]
pub struct SchemaError {
    /// The record type that was being built.
    pub shape: &'static str,
    /// Location of the offending value, e.g. `EducatorEventsDays[1].DayStudyEvents[0].Subject`.
    pub path: String,
    /// Last object key on the path, if any.
    pub field: Option<String>,
    pub problem: SchemaProblem,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaProblem {
    MissingField,
    NullField,
    WrongType(String),
}

impl fmt::Display for SchemaProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField => f.write_str("missing required field"),
            Self::NullField => f.write_str("required field is null"),
            Self::WrongType(message) => f.write_str(message),
        }
    }
}

/// A date/time string was present but did not match its expected encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field `{field}`: could not parse {value:?} (expected format {expected})")]
pub struct FormatError {
    pub field: String,
    pub value: String,
    pub expected: &'static str,
}
