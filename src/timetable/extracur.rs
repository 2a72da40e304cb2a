//! Extracurricular activities: sports, clubs, public lectures.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::datetime::format_date;
use crate::error::Result;
use crate::json_util::{
    parse_date, parse_date_of_datetime, parse_datetime, parse_flag, parse_record, parse_records,
    parse_vec,
};
use crate::timetable::events::Location;
use crate::timetable::{TimetableClient, Transport};
use crate::validate;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExtracurDivision {
    pub alias: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExtracurEvent {
    pub subject: String,
    #[serde(default, deserialize_with = "parse_datetime")]
    pub start: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "parse_datetime")]
    pub end: Option<NaiveDateTime>,
    pub time_interval_string: String,
    pub date_with_time_interval_string: Option<String>,
    pub locations_display_text: Option<String>,
    pub educators_display_text: Option<String>,
    pub has_educators: bool,
    pub is_cancelled: bool,
    pub responsible_person_contacts: Option<String>,
    #[serde(default, deserialize_with = "parse_vec")]
    pub event_locations: Vec<Location>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExtracurEventGrouping {
    pub caption: Option<String>,
    #[serde(default, deserialize_with = "parse_vec")]
    pub events: Vec<ExtracurEvent>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExtracurDay {
    #[serde(default, deserialize_with = "parse_date_of_datetime")]
    pub day: Option<NaiveDate>,
    pub day_string: String,
    #[serde(rename = "DayStudyEvents", default, deserialize_with = "parse_vec")]
    pub events: Vec<ExtracurEvent>,
}

/// Events of one extracurricular division, with month and week navigation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExtracurEvents {
    pub alias: String,
    pub title: String,
    pub has_events_to_show: bool,

    pub chosen_month_display_text: Option<String>,
    pub previous_month_display_text: Option<String>,
    /// Navigation value, passed through as sent.
    pub previous_month_date: Option<String>,
    pub next_month_display_text: Option<String>,
    pub next_month_date: Option<String>,
    /// Omitted by the API when false.
    #[serde(default, deserialize_with = "parse_flag")]
    pub is_current_month_reference_available: bool,
    /// Omitted by the API when false.
    #[serde(default, deserialize_with = "parse_flag")]
    pub show_grouping_captions: bool,
    #[serde(default, deserialize_with = "parse_vec")]
    pub event_groupings: Vec<ExtracurEventGrouping>,

    pub is_previous_week_reference_available: bool,
    pub is_next_week_reference_available: bool,
    pub is_current_week_reference_available: bool,
    #[serde(default, deserialize_with = "parse_date")]
    pub previous_week_monday: Option<NaiveDate>,
    #[serde(default, deserialize_with = "parse_date")]
    pub next_week_monday: Option<NaiveDate>,
    pub week_display_text: String,
    #[serde(default, deserialize_with = "parse_date")]
    pub week_monday: Option<NaiveDate>,

    pub earlier_events: Vec<ExtracurEvent>,
    pub days: Vec<ExtracurDay>,
}

impl<T: Transport> TimetableClient<T> {
    /// # Errors
    /// Fails on a non-200 response or an unexpected payload.
    pub fn extracur_divisions(&self) -> Result<Vec<ExtracurDivision>> {
        self.get_json(
            "Get extracurricular divisions",
            &["extracur", "divisions"],
            &[],
            parse_records,
        )
    }

    /// Events of the division with the given alias, for the current month or
    /// the month containing `month`.
    ///
    /// # Errors
    /// Fails on a malformed alias, a non-200 response or an unexpected payload.
    pub fn extracur_events(&self, alias: &str, month: Option<NaiveDate>) -> Result<ExtracurEvents> {
        validate::alias(alias)?;
        let month = month.map(|m| format_date(m.with_day(1).unwrap_or(m)));
        let mut segments = vec!["extracur", "events", alias];
        if let Some(month) = &month {
            segments.push(month);
        }
        self.get_json(
            "Get extracurricular events",
            &segments,
            &[],
            parse_record,
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn month_navigation_dates_are_passed_through() {
        let events: ExtracurEvents = parse_record(&json!({
            "Alias": "PhysTraining",
            "Title": "Физическая культура и спорт",
            "HasEventsToShow": true,
            "PreviousMonthDate": "2019-04-01T00:00:00",
            "NextMonthDate": "2019-06-01",
            "IsPreviousWeekReferenceAvailable": true,
            "IsNextWeekReferenceAvailable": true,
            "IsCurrentWeekReferenceAvailable": false,
            "WeekDisplayText": "20 мая - 26 мая",
            "EarlierEvents": [],
            "Days": [],
        }))
        .unwrap();
        assert_eq!(events.previous_month_date.as_deref(), Some("2019-04-01T00:00:00"));
        assert_eq!(events.next_month_date.as_deref(), Some("2019-06-01"));
        assert_eq!(events.week_monday, None);
    }
}
