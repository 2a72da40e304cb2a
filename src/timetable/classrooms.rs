use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::datetime::format_datetime;
use crate::error::Result;
use crate::json_util::{parse_date_of_datetime, parse_datetime, parse_record, parse_vec};
use crate::timetable::events::TermStudyEvent;
use crate::timetable::{TimetableClient, Transport};
use crate::validate;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClassroomDay {
    #[serde(default, deserialize_with = "parse_date_of_datetime")]
    pub day: Option<NaiveDate>,
    pub day_string: String,
    #[serde(rename = "DayStudyEventsCount")]
    pub events_count: u32,
    #[serde(rename = "DayStudyEvents", default, deserialize_with = "parse_vec")]
    pub events: Vec<TermStudyEvent>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClassroomEvents {
    pub oid: String,
    #[serde(default, deserialize_with = "parse_datetime")]
    pub from: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "parse_datetime")]
    pub to: Option<NaiveDateTime>,
    pub display_text: String,
    pub has_events: bool,
    #[serde(rename = "ClassroomEventsDays", default, deserialize_with = "parse_vec")]
    pub days: Vec<ClassroomDay>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClassroomBusyness {
    pub oid: String,
    #[serde(default, deserialize_with = "parse_datetime")]
    pub from: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "parse_datetime")]
    pub to: Option<NaiveDateTime>,
    pub is_busy: bool,
}

impl<T: Transport> TimetableClient<T> {
    /// Events taking place in a classroom within the given range.
    ///
    /// # Errors
    /// Fails on a malformed oid, a non-200 response or an unexpected payload.
    pub fn classroom_events(
        &self,
        classroom_oid: &str,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<ClassroomEvents> {
        validate::oid(classroom_oid)?;
        let (from, to) = (format_datetime(from), format_datetime(to));
        self.get_json(
            "Get classroom events",
            &["classrooms", classroom_oid, "events", from.as_str(), to.as_str()],
            &[],
            parse_record,
        )
    }

    /// Whether a classroom is occupied at some point within the given range.
    ///
    /// # Errors
    /// Fails on a malformed oid, a non-200 response or an unexpected payload.
    pub fn is_classroom_busy(
        &self,
        classroom_oid: &str,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<ClassroomBusyness> {
        validate::oid(classroom_oid)?;
        let (from, to) = (format_datetime(from), format_datetime(to));
        self.get_json(
            "Check classroom busyness",
            &["classrooms", classroom_oid, "isbusy", from.as_str(), to.as_str()],
            &[],
            parse_record,
        )
    }
}
