//! Store integration tests against a real MongoDB.
//!
//! Run with: MONGODB_URI=mongodb://localhost:27017 cargo test -- --ignored
//!
//! Each test works in its own throwaway database and drops it afterwards.

use chrono::Utc;
use mongodb::Client;

use eventboard::db::seed;
use eventboard::db::{EventRepo, VenueRepo};
use eventboard::models::{NewEvent, NewVenue};
use eventboard::Store;

fn test_uri() -> String {
    std::env::var("MONGODB_URI").expect("MONGODB_URI required")
}

async fn fresh_store(label: &str) -> (Store, String) {
    let db_name = format!("eventboard_test_{}_{}", label, Utc::now().timestamp_millis());
    let store = Store::connect(&test_uri(), &db_name)
        .await
        .expect("store connect");
    (store, db_name)
}

async fn drop_db(db_name: &str) {
    let client = Client::with_uri_str(test_uri()).await.expect("client");
    client.database(db_name).drop().await.expect("drop test db");
}

#[tokio::test]
#[ignore = "requires database"]
async fn add_event_assigns_id_and_appears_in_list() {
    let (store, db_name) = fresh_store("add_event").await;

    let new_event = NewEvent::new("Book Club", "2024-07-01", "Library", "Monthly meetup").unwrap();
    let record = EventRepo::new(&store).add(new_event).await.unwrap();

    assert!(record.id.is_some());
    assert_eq!(record.title, "Book Club");

    let listed = EventRepo::new(&store).list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, record.id);

    drop_db(&db_name).await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn events_list_sorted_by_date_ascending() {
    let (store, db_name) = fresh_store("event_sort").await;
    let repo = EventRepo::new(&store);

    for (title, date) in [
        ("Later", "2024-09-01"),
        ("First", "2024-01-15"),
        ("Middle", "2024-05-20"),
    ] {
        let event = NewEvent::new(title, date, "Somewhere", "Something").unwrap();
        repo.add(event).await.unwrap();
    }

    let listed = repo.list().await.unwrap();
    let dates: Vec<_> = listed.iter().map(|e| e.date).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
    assert_eq!(listed[0].title, "First");

    drop_db(&db_name).await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn venues_list_sorted_by_name_ascending() {
    let (store, db_name) = fresh_store("venue_sort").await;
    let repo = VenueRepo::new(&store);

    for name in ["Zenith Hall", "Annex", "Midtown Loft"] {
        let venue = NewVenue::new(name, "1 Somewhere St", "100", "").unwrap();
        repo.add(venue).await.unwrap();
    }

    let listed = repo.list().await.unwrap();
    let names: Vec<_> = listed.iter().map(|v| v.name.clone()).collect();
    assert_eq!(names, vec!["Annex", "Midtown Loft", "Zenith Hall"]);

    drop_db(&db_name).await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn insert_defaults_twice_duplicates_samples() {
    let (store, db_name) = fresh_store("seed_twice").await;

    seed::insert_defaults(&store).await.unwrap();
    seed::insert_defaults(&store).await.unwrap();

    assert_eq!(EventRepo::new(&store).count().await.unwrap(), 4);
    assert_eq!(VenueRepo::new(&store).count().await.unwrap(), 4);

    drop_db(&db_name).await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn seed_if_empty_runs_once() {
    let (store, db_name) = fresh_store("seed_guard").await;

    assert!(seed::seed_if_empty(&store).await.unwrap());
    assert!(!seed::seed_if_empty(&store).await.unwrap());

    assert_eq!(EventRepo::new(&store).count().await.unwrap(), 2);
    assert_eq!(VenueRepo::new(&store).count().await.unwrap(), 2);

    drop_db(&db_name).await;
}
