//! Event model - a scheduled occurrence with title, date, location, description

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::validation::{require, ValidationError};

/// Event document as stored in the `events` collection.
///
/// `id` is `None` until the store assigns an `_id` on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub date: DateTime<Utc>,
    pub location: String,
    pub description: String,
}

/// Validated input for a new event.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub description: String,
}

impl NewEvent {
    /// Build a new event from raw form fields.
    ///
    /// All four fields are required; `date` accepts `YYYY-MM-DD` (midnight
    /// UTC) or a full RFC 3339 timestamp.
    pub fn new(
        title: &str,
        date: &str,
        location: &str,
        description: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: require("title", title)?,
            date: parse_event_date(date)?,
            location: require("location", location)?,
            description: require("description", description)?,
        })
    }
}

impl From<NewEvent> for EventRecord {
    fn from(new_event: NewEvent) -> Self {
        Self {
            id: None,
            title: new_event.title,
            date: new_event.date,
            location: new_event.location,
            description: new_event.description,
        }
    }
}

fn parse_event_date(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field: "date" });
    }

    if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(day.and_time(NaiveTime::MIN).and_utc());
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    Err(ValidationError::InvalidFormat {
        field: "date",
        reason: "expected YYYY-MM-DD or an RFC 3339 timestamp",
    })
}
