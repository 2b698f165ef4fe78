//! Event repository

use futures::TryStreamExt;
use mongodb::bson::doc;

use crate::db::store::{Store, StoreError};
use crate::models::{EventRecord, NewEvent};

/// Event repository
pub struct EventRepo<'a> {
    store: &'a Store,
}

impl<'a> EventRepo<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// List all events, sorted ascending by date.
    pub async fn list(&self) -> Result<Vec<EventRecord>, StoreError> {
        let cursor = self
            .store
            .events()
            .find(doc! {})
            .sort(doc! { "date": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Insert a new event and return the record with its assigned id.
    pub async fn add(&self, new_event: NewEvent) -> Result<EventRecord, StoreError> {
        let mut record = EventRecord::from(new_event);
        let inserted = self.store.events().insert_one(&record).await?;
        record.id = inserted.inserted_id.as_object_id();
        Ok(record)
    }

    /// Count all events.
    pub async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.store.events().count_documents(doc! {}).await?)
    }
}
