//! MongoDB connection handle
//!
//! The handle is created once at startup and shared by every request; the
//! driver maintains its own connection pool behind it.

use mongodb::bson::doc;
use mongodb::error::ErrorKind;
use mongodb::{Client, Collection, Database};

use crate::models::{EventRecord, VenueRecord};

/// Collection holding event documents
const EVENTS_COLLECTION: &str = "events";

/// Collection holding venue documents
const VENUES_COLLECTION: &str = "venues";

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database could not be reached (server selection, DNS, socket IO)
    #[error("database unavailable: {0}")]
    Unavailable(#[source] mongodb::error::Error),

    /// Any other driver error
    #[error("database error: {0}")]
    Database(#[source] mongodb::error::Error),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        if is_connectivity(&err) {
            Self::Unavailable(err)
        } else {
            Self::Database(err)
        }
    }
}

fn is_connectivity(err: &mongodb::error::Error) -> bool {
    matches!(
        &*err.kind,
        ErrorKind::ServerSelection { .. }
            | ErrorKind::DnsResolve { .. }
            | ErrorKind::Io(_)
            | ErrorKind::ConnectionPoolCleared { .. }
    )
}

/// Handle to the event/venue database.
///
/// Cheap to clone; clones share the underlying client and pool.
#[derive(Clone)]
pub struct Store {
    db: Database,
}

impl Store {
    /// Build the client and database handle.
    ///
    /// Fails only on an unparseable URI; the first actual connection is made
    /// lazily by the driver. Use [`Store::ping`] to probe reachability.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self {
            db: client.database(db_name),
        })
    }

    /// Round-trip a `ping` command to verify the database is reachable.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub fn events(&self) -> Collection<EventRecord> {
        self.db.collection(EVENTS_COLLECTION)
    }

    pub fn venues(&self) -> Collection<VenueRecord> {
        self.db.collection(VENUES_COLLECTION)
    }
}
