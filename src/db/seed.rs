//! Startup seeding with fixed sample data
//!
//! [`insert_defaults`] writes the sample records unconditionally - calling it
//! twice duplicates them. The emptiness guard lives in [`seed_if_empty`],
//! which runs once at startup so the homepage never races a per-request seed.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::db::repos::{EventRepo, VenueRepo};
use crate::db::store::{Store, StoreError};
use crate::models::{EventRecord, VenueRecord};

fn sample_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid sample date")
        .and_time(NaiveTime::MIN)
        .and_utc()
}

/// The two sample events inserted on first run.
pub fn sample_events() -> Vec<EventRecord> {
    vec![
        EventRecord {
            id: None,
            title: "Community Picnic".to_owned(),
            date: sample_date(2024, 5, 1),
            location: "Central Park".to_owned(),
            description: "A fun day with games, food, and activities for everyone.".to_owned(),
        },
        EventRecord {
            id: None,
            title: "Tech Conference".to_owned(),
            date: sample_date(2024, 6, 15),
            location: "Convention Center".to_owned(),
            description: "Tech enthusiasts and experts sharing knowledge.".to_owned(),
        },
    ]
}

/// The two sample venues inserted on first run.
pub fn sample_venues() -> Vec<VenueRecord> {
    vec![
        VenueRecord {
            id: None,
            name: "Convention Center".to_owned(),
            address: "123 Main St, Cityville".to_owned(),
            capacity: 500,
            amenities: Some("WiFi, AV equipment, Catering services".to_owned()),
        },
        VenueRecord {
            id: None,
            name: "Central Park".to_owned(),
            address: "456 Park Ave, Cityville".to_owned(),
            capacity: 1000,
            amenities: Some("Outdoor space, Picnic areas, Playground".to_owned()),
        },
    ]
}

/// Insert the sample events and venues unconditionally.
///
/// Not idempotent: every call appends a fresh copy of the samples. Callers
/// that want exactly-once seeding go through [`seed_if_empty`].
pub async fn insert_defaults(store: &Store) -> Result<(), StoreError> {
    store.events().insert_many(sample_events()).await?;
    store.venues().insert_many(sample_venues()).await?;
    Ok(())
}

/// Seed the sample data when either collection is empty.
///
/// Returns `true` when seeding ran.
pub async fn seed_if_empty(store: &Store) -> Result<bool, StoreError> {
    let events = EventRepo::new(store).count().await?;
    let venues = VenueRepo::new(store).count().await?;
    if events > 0 && venues > 0 {
        return Ok(false);
    }

    tracing::info!(events, venues, "collections empty, inserting sample data");
    insert_defaults(store).await?;
    Ok(true)
}
