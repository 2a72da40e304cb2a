use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::json_util::parse_records;
use crate::timetable::{TimetableClient, Transport};
use crate::validate;

/// How seats are arranged in a classroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SeatingType {
    Theater,
    Amphitheater,
    Roundtable,
}

impl SeatingType {
    /// Numeric code used by the API.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Theater => 0,
            Self::Amphitheater => 1,
            Self::Roundtable => 2,
        }
    }

    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Theater),
            1 => Some(Self::Amphitheater),
            2 => Some(Self::Roundtable),
            _ => None,
        }
    }
}

/// Narrows the addresses and classrooms returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassroomFilter {
    pub seating: Option<SeatingType>,
    /// Minimal number of seats.
    pub capacity: Option<u32>,
    pub equipment: Option<String>,
}

impl ClassroomFilter {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(seating) = self.seating {
            query.push(("seating", seating.code().to_string()));
        }
        if let Some(capacity) = self.capacity {
            query.push(("capacity", capacity.to_string()));
        }
        if let Some(equipment) = &self.equipment {
            query.push(("equipment", equipment.clone()));
        }
        query
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Address {
    #[serde(rename = "Oid")]
    pub oid: String,
    #[serde(rename = "DisplayName1")]
    pub display_name: String,
    /// Whether the building has classrooms matching the filter.
    pub matches: bool,
    #[serde(rename = "wantingEquipment")]
    pub wanting_equipment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Classroom {
    pub oid: String,
    #[serde(rename = "DisplayName1")]
    pub display_name: String,
    pub seating_type: i32,
    pub capacity: u32,
    pub additional_info: Option<String>,
    #[serde(rename = "wantingEquipment")]
    pub wanting_equipment: Option<String>,
}

impl Classroom {
    #[must_use]
    pub const fn seating(&self) -> Option<SeatingType> {
        SeatingType::from_code(self.seating_type)
    }
}

impl<T: Transport> TimetableClient<T> {
    /// All university buildings, optionally narrowed by `filter`.
    ///
    /// # Errors
    /// Fails on a non-200 response or an unexpected payload.
    pub fn addresses(&self, filter: &ClassroomFilter) -> Result<Vec<Address>> {
        self.get_json("Get addresses", &["addresses"], &filter.query(), parse_records)
    }

    /// Classrooms of the building with the given oid.
    ///
    /// # Errors
    /// Fails on a malformed oid, a non-200 response or an unexpected payload.
    pub fn classrooms(&self, address_oid: &str, filter: &ClassroomFilter) -> Result<Vec<Classroom>> {
        validate::oid(address_oid)?;
        self.get_json(
            "Get classrooms",
            &["addresses", address_oid, "classrooms"],
            &filter.query(),
            parse_records,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_sends_no_query() {
        assert!(ClassroomFilter::default().query().is_empty());
    }

    #[test]
    fn filter_query_in_fixed_order() {
        let filter = ClassroomFilter {
            seating: Some(SeatingType::Roundtable),
            capacity: Some(30),
            equipment: Some(String::from("projector")),
        };
        assert_eq!(
            filter.query(),
            vec![
                ("seating", String::from("2")),
                ("capacity", String::from("30")),
                ("equipment", String::from("projector")),
            ]
        );
    }

    #[test]
    fn seating_codes_round_trip() {
        for seating in [
            SeatingType::Theater,
            SeatingType::Amphitheater,
            SeatingType::Roundtable,
        ] {
            assert_eq!(SeatingType::from_code(seating.code()), Some(seating));
        }
        assert_eq!(SeatingType::from_code(9), None);
    }
}
