//! Homepage - the event and venue listing

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::db::{EventRepo, VenueRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::http::views;

/// GET / - render the homepage with current events and venues.
///
/// Seeding happens once at startup, so both reads here are always fresh.
async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let events = EventRepo::new(&state.store).list().await?;
    let venues = VenueRepo::new(&state.store).list().await?;

    Ok(Html(views::index_page(&events, &venues)))
}

/// Homepage route
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}
