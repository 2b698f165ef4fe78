//! Venue model - a place with name, address, capacity, optional amenities

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::validation::{require, ValidationError};

/// Venue document as stored in the `venues` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub address: String,
    pub capacity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<String>,
}

/// Validated input for a new venue.
#[derive(Debug, Clone)]
pub struct NewVenue {
    pub name: String,
    pub address: String,
    pub capacity: i64,
    pub amenities: Option<String>,
}

impl NewVenue {
    /// Build a new venue from raw form fields.
    ///
    /// Name, address and capacity are required; capacity must be a whole
    /// number. Amenities are free text, a blank value normalizes to `None`.
    pub fn new(
        name: &str,
        address: &str,
        capacity: &str,
        amenities: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require("name", name)?,
            address: require("address", address)?,
            capacity: parse_capacity(capacity)?,
            amenities: normalize_amenities(amenities),
        })
    }
}

impl From<NewVenue> for VenueRecord {
    fn from(new_venue: NewVenue) -> Self {
        Self {
            id: None,
            name: new_venue.name,
            address: new_venue.address,
            capacity: new_venue.capacity,
            amenities: new_venue.amenities,
        }
    }
}

fn parse_capacity(value: &str) -> Result<i64, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field: "capacity" });
    }

    trimmed.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "capacity",
        reason: "must be a whole number",
    })
}

fn normalize_amenities(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_venue() {
        let venue = NewVenue::new("Town Hall", "1 Civic Sq", "250", "WiFi, Stage").unwrap();

        assert_eq!(venue.name, "Town Hall");
        assert_eq!(venue.capacity, 250);
        assert_eq!(venue.amenities.as_deref(), Some("WiFi, Stage"));
    }

    #[test]
    fn amenities_are_optional() {
        let venue = NewVenue::new("Town Hall", "1 Civic Sq", "250", "  ").unwrap();
        assert!(venue.amenities.is_none());
    }

    #[test]
    fn rejects_missing_capacity() {
        let err = NewVenue::new("Town Hall", "1 Civic Sq", "", "").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "capacity" }));
    }

    #[test]
    fn rejects_non_numeric_capacity() {
        let err = NewVenue::new("Town Hall", "1 Civic Sq", "lots", "").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidFormat { field: "capacity", .. }
        ));
    }

    #[test]
    fn rejects_empty_name() {
        let err = NewVenue::new("", "1 Civic Sq", "250", "").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "name" }));
    }
}
