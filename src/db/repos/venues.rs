//! Venue repository

use futures::TryStreamExt;
use mongodb::bson::doc;

use crate::db::store::{Store, StoreError};
use crate::models::{NewVenue, VenueRecord};

/// Venue repository
pub struct VenueRepo<'a> {
    store: &'a Store,
}

impl<'a> VenueRepo<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// List all venues, sorted ascending (lexicographic) by name.
    pub async fn list(&self) -> Result<Vec<VenueRecord>, StoreError> {
        let cursor = self
            .store
            .venues()
            .find(doc! {})
            .sort(doc! { "name": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Insert a new venue and return the record with its assigned id.
    pub async fn add(&self, new_venue: NewVenue) -> Result<VenueRecord, StoreError> {
        let mut record = VenueRecord::from(new_venue);
        let inserted = self.store.venues().insert_one(&record).await?;
        record.id = inserted.inserted_id.as_object_id();
        Ok(record)
    }

    /// Count all venues.
    pub async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.store.venues().count_documents(doc! {}).await?)
    }
}
