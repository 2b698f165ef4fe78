//! Event endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Form, Json, Router};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::db::EventRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{EventRecord, NewEvent};

/// Add event form body.
///
/// Fields default to empty strings so a missing field surfaces as a
/// validation error rather than a deserialization rejection.
#[derive(Deserialize)]
pub struct AddEventForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
}

/// Event response
#[derive(Serialize)]
pub struct EventResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub date: String,
    pub location: String,
    pub description: String,
}

impl From<EventRecord> for EventResponse {
    fn from(record: EventRecord) -> Self {
        Self {
            id: record.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: record.title,
            date: record.date.to_rfc3339_opts(SecondsFormat::Millis, true),
            location: record.location,
            description: record.description,
        }
    }
}

/// Add event acknowledgement
#[derive(Serialize)]
pub struct AddEventResponse {
    pub message: &'static str,
    pub event: EventResponse,
}

/// POST /add-event - validate the form and persist a new event.
async fn add_event(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddEventForm>,
) -> Result<Json<AddEventResponse>, ApiError> {
    let new_event = NewEvent::new(&form.title, &form.date, &form.location, &form.description)?;
    let record = EventRepo::new(&state.store).add(new_event).await?;

    Ok(Json(AddEventResponse {
        message: "Event added successfully",
        event: record.into(),
    }))
}

/// Event routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/add-event", post(add_event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn response_serializes_date_with_millis() {
        let record: EventRecord =
            NewEvent::new("Book Club", "2024-07-01", "Library", "Monthly meetup")
                .unwrap()
                .into();
        let response = EventResponse::from(record);

        assert_eq!(response.date, "2024-07-01T00:00:00.000Z");
    }

    #[test]
    fn response_uses_underscore_id_key() {
        let mut record: EventRecord =
            NewEvent::new("Book Club", "2024-07-01", "Library", "Monthly meetup")
                .unwrap()
                .into();
        let id = ObjectId::new();
        record.id = Some(id);

        let json = serde_json::to_value(EventResponse::from(record)).unwrap();
        assert_eq!(json["_id"], id.to_hex());
    }
}
