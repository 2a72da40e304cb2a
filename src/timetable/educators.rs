use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::datetime::format_date;
use crate::error::Result;
use crate::json_util::{parse_date, parse_date_of_datetime, parse_datetime, parse_record, parse_vec};
use crate::timetable::events::{EducatorLocation, TermStudyEvent};
use crate::timetable::{TimetableClient, Transport};
use crate::validate;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Employment {
    pub position: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Educator {
    pub id: u32,
    pub display_name: String,
    pub full_name: String,
    #[serde(default, deserialize_with = "parse_vec")]
    pub employments: Vec<Employment>,
}

/// Wrapper object of the search endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct EducatorSearch {
    educators: Vec<Educator>,
}

/// A single occurrence of an event within one week.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WeekStudyEvent {
    #[serde(rename = "StudyEventsTimeTableKindCode")]
    pub timetable_kind_code: i32,
    #[serde(default, deserialize_with = "parse_datetime")]
    pub start: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "parse_datetime")]
    pub end: Option<NaiveDateTime>,
    pub subject: String,
    pub time_interval_string: String,
    pub date_with_time_interval_string: String,
    pub display_date_and_time_interval_string: String,
    pub locations_display_text: String,
    pub educators_display_text: Option<String>,
    pub has_educators: bool,
    pub is_cancelled: bool,
    pub contingent_unit_name: String,
    pub division_and_course: Option<String>,
    pub is_assigned: bool,
    pub time_was_changed: bool,
    pub locations_were_changed: bool,
    pub educators_were_reassigned: bool,
    pub elective_disciplines_count: u32,
    pub is_elective: bool,
    /// Set when the previous event of the day starts at the same time.
    pub has_the_same_time_as_previous_item: bool,
    pub is_study: bool,
    pub all_day: bool,
    pub within_the_same_day: bool,
    #[serde(default, deserialize_with = "parse_vec")]
    pub event_locations: Vec<EducatorLocation>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WeekDay {
    #[serde(default, deserialize_with = "parse_date_of_datetime")]
    pub day: Option<NaiveDate>,
    pub day_string: String,
    #[serde(rename = "DayStudyEvents", default, deserialize_with = "parse_vec")]
    pub events: Vec<WeekStudyEvent>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EducatorWeekEvents {
    pub educator_master_id: u32,
    pub educator_display_text: String,
    pub educator_long_display_text: String,
    #[serde(default, deserialize_with = "parse_date")]
    pub previous_week_monday: Option<NaiveDate>,
    #[serde(default, deserialize_with = "parse_date")]
    pub next_week_monday: Option<NaiveDate>,
    pub is_previous_week_reference_available: bool,
    pub is_next_week_reference_available: bool,
    pub is_current_week_reference_available: bool,
    pub week_display_text: String,
    #[serde(default, deserialize_with = "parse_date")]
    pub week_monday: Option<NaiveDate>,
    #[serde(rename = "EducatorEventsDays", default, deserialize_with = "parse_vec")]
    pub days: Vec<WeekDay>,
}

/// One weekday of a term schedule.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TermDay {
    /// Plain day number as sent by the API (the weekday, Monday being 1).
    pub day: u32,
    pub day_string: String,
    #[serde(rename = "DayStudyEventsCount")]
    pub events_count: u32,
    #[serde(rename = "DayStudyEvents", default, deserialize_with = "parse_vec")]
    pub events: Vec<TermStudyEvent>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EducatorTermEvents {
    pub title: String,
    pub educator_master_id: u32,
    pub educator_display_text: String,
    pub educator_long_display_text: String,
    pub date_range_display_text: String,
    pub is_spring_term: bool,
    #[serde(default, deserialize_with = "parse_date_of_datetime")]
    pub from: Option<NaiveDate>,
    #[serde(default, deserialize_with = "parse_date_of_datetime")]
    pub to: Option<NaiveDate>,
    /// Whether this is the upcoming term rather than the current one.
    pub next: bool,
    pub spring_term_link_available: bool,
    pub autumn_term_link_available: bool,
    pub has_events: bool,
    #[serde(rename = "EducatorEventsDays", default, deserialize_with = "parse_vec")]
    pub days: Vec<TermDay>,
}

impl<T: Transport> TimetableClient<T> {
    /// Searches educators by (a part of) their last name.
    ///
    /// # Errors
    /// Fails on an empty query, a non-200 response or an unexpected payload.
    pub fn search_educators(&self, query: &str) -> Result<Vec<Educator>> {
        validate::search_query(query)?;
        let search: EducatorSearch = self.get_json(
            "Search educator",
            &["educators", "search", query],
            &[],
            parse_record,
        )?;
        Ok(search.educators)
    }

    /// Events of an educator between two dates.
    ///
    /// # Errors
    /// Fails on a non-200 response or an unexpected payload.
    pub fn educator_week_events(
        &self,
        educator_id: u32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<EducatorWeekEvents> {
        let id = educator_id.to_string();
        let (from, to) = (format_date(from), format_date(to));
        self.get_json(
            "Get educator events",
            &["educators", id.as_str(), "events", from.as_str(), to.as_str()],
            &[],
            parse_record,
        )
    }

    /// Events of an educator for the current term, or the next one.
    ///
    /// # Errors
    /// Fails on a non-200 response or an unexpected payload.
    pub fn educator_term_events(
        &self,
        educator_id: u32,
        next_term: bool,
    ) -> Result<EducatorTermEvents> {
        let id = educator_id.to_string();
        let query = [("showNextTerm", u8::from(next_term).to_string())];
        self.get_json(
            "Get educator term events",
            &["educators", id.as_str(), "events"],
            &query,
            parse_record,
        )
    }
}
