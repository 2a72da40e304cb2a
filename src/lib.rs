#![deny(unexpected_cfgs)]
//
#![warn(clippy::cargo)]
#![warn(clippy::nursery)]
//
// https://github.com/rust-lang/rust-clippy/issues/16440
#![allow(clippy::multiple_crate_versions)]

mod error;
mod json_util;
mod validate;

pub mod datetime;
pub mod timetable;

pub use error::{ApiError, Error, FormatError, Result, SchemaError, SchemaProblem};
pub use json_util::{parse_record, parse_records};
pub use timetable::{DEFAULT_BASE_URL, HttpTransport, RawResponse, TimetableClient, Transport};
