//! Records shared between the educator, classroom and extracurricular schedules.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::json_util::{parse_time, parse_vec};

/// An `(id, name)` tuple, sent by the API as `{"Item1": id, "Item2": name}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct IdentityPair {
    #[serde(rename = "Item1")]
    pub id: u32,
    #[serde(rename = "Item2")]
    pub name: String,
}

/// Audience of a study event: group names and course description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ContingentUnit {
    #[serde(rename = "Item1")]
    pub groups: String,
    #[serde(rename = "Item2")]
    pub courses: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Location {
    pub is_empty: bool,
    pub display_name: String,
    pub has_geographic_coordinates: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub latitude_value: Option<String>,
    pub longitude_value: Option<String>,
}

impl Location {
    /// Both coordinates, if the location has them.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if self.has_geographic_coordinates => Some((lat, lon)),
            _ => None,
        }
    }
}

/// A location together with the educators assigned to it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EducatorLocation {
    #[serde(flatten)]
    pub location: Location,
    pub educators_display_text: Option<String>,
    pub has_educators: bool,
    #[serde(default, deserialize_with = "parse_vec")]
    pub educator_ids: Vec<IdentityPair>,
}

/// A recurring event of a term-long schedule, keyed by time of day.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TermStudyEvent {
    #[serde(default, deserialize_with = "parse_time")]
    pub start: Option<NaiveTime>,
    #[serde(default, deserialize_with = "parse_time")]
    pub end: Option<NaiveTime>,
    pub subject: String,
    pub time_interval_string: String,
    /// Dates the event takes place on, as display strings.
    #[serde(default, deserialize_with = "parse_vec")]
    pub dates: Vec<String>,
    pub educators_display_text: Option<String>,
    #[serde(rename = "IsCanceled")]
    pub is_cancelled: bool,
    #[serde(rename = "StudyEventsTimeTableKindCode")]
    pub timetable_kind_code: i32,
    #[serde(default, deserialize_with = "parse_vec")]
    pub educator_ids: Vec<IdentityPair>,
    #[serde(default, deserialize_with = "parse_vec")]
    pub event_locations: Vec<EducatorLocation>,
    #[serde(default, deserialize_with = "parse_vec")]
    pub contingent_unit_names: Vec<ContingentUnit>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::Error;
    use crate::json_util::{parse_record, parse_records};

    #[test]
    fn identity_pairs_keep_order() {
        let pairs: Vec<IdentityPair> = parse_records(&json!([
            { "Item1": 7, "Item2": "Smith" },
            { "Item1": 2, "Item2": "Jones" },
        ]))
        .unwrap();
        assert_eq!(
            pairs,
            vec![
                IdentityPair { id: 7, name: "Smith".into() },
                IdentityPair { id: 2, name: "Jones".into() },
            ]
        );
    }

    #[test]
    fn location_without_coordinates() {
        let location: Location = parse_record(&json!({
            "IsEmpty": false,
            "DisplayName": "Университетский пр., 28, 2414",
            "HasGeographicCoordinates": false,
            "Latitude": null,
            "Longitude": null,
        }))
        .unwrap();
        assert_eq!(location.latitude, None);
        assert_eq!(location.latitude_value, None);
        assert_eq!(location.coordinates(), None);
    }

    #[test]
    fn educator_location_missing_base_field_names_the_location() {
        let err = parse_record::<EducatorLocation>(&json!({
            "DisplayName": "Менделеевская линия, 5, 112",
            "HasGeographicCoordinates": false,
            "HasEducators": false,
        }))
        .unwrap_err();
        let Error::Schema(err) = err else {
            panic!("expected a schema error");
        };
        assert_eq!(err.shape, "EducatorLocation");
        assert_eq!(err.field.as_deref(), Some("IsEmpty"));
    }

    #[test]
    fn educator_location_without_educators_has_empty_ids() {
        let location: EducatorLocation = parse_record(&json!({
            "IsEmpty": false,
            "DisplayName": "Менделеевская линия, 5, 112",
            "HasGeographicCoordinates": true,
            "Latitude": 59.941_894,
            "Longitude": 30.299_001,
            "LatitudeValue": "59.941894",
            "LongitudeValue": "30.299001",
            "HasEducators": false,
        }))
        .unwrap();
        assert!(location.educator_ids.is_empty());
        assert_eq!(location.educators_display_text, None);
        assert_eq!(location.location.coordinates(), Some((59.941_894, 30.299_001)));
    }

    #[test]
    fn term_event_without_optional_arrays() {
        let event: TermStudyEvent = parse_record(&json!({
            "Start": "09:30:00",
            "End": "11:05:00",
            "Subject": "Алгебра, лекция",
            "TimeIntervalString": "09:30–11:05",
            "IsCanceled": false,
            "StudyEventsTimeTableKindCode": 1,
        }))
        .unwrap();
        assert!(event.dates.is_empty());
        assert!(event.educator_ids.is_empty());
        assert!(event.event_locations.is_empty());
        assert!(event.contingent_unit_names.is_empty());
        assert_eq!(event.start, NaiveTime::from_hms_opt(9, 30, 0));
    }
}
