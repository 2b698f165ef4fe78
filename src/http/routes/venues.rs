//! Venue endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::VenueRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{NewVenue, VenueRecord};

/// Add venue form body.
#[derive(Deserialize)]
pub struct AddVenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub capacity: String,
    #[serde(default)]
    pub amenities: String,
}

/// Venue response
#[derive(Serialize)]
pub struct VenueResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub address: String,
    pub capacity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<String>,
}

impl From<VenueRecord> for VenueResponse {
    fn from(record: VenueRecord) -> Self {
        Self {
            id: record.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: record.name,
            address: record.address,
            capacity: record.capacity,
            amenities: record.amenities,
        }
    }
}

/// Add venue acknowledgement
#[derive(Serialize)]
pub struct AddVenueResponse {
    pub message: &'static str,
    pub venue: VenueResponse,
}

/// POST /add-venue - validate the form and persist a new venue.
async fn add_venue(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddVenueForm>,
) -> Result<Json<AddVenueResponse>, ApiError> {
    let new_venue = NewVenue::new(&form.name, &form.address, &form.capacity, &form.amenities)?;
    let record = VenueRepo::new(&state.store).add(new_venue).await?;

    Ok(Json(AddVenueResponse {
        message: "Venue added successfully",
        venue: record.into(),
    }))
}

/// Venue routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/add-venue", post(add_venue))
}
