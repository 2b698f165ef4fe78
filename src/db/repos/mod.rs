//! Repository types for database access
//!
//! One repository per collection. Repositories borrow the [`Store`] handle
//! and perform single independent operations - no transactions.
//!
//! [`Store`]: crate::db::Store

pub mod events;
pub mod venues;

pub use events::EventRepo;
pub use venues::VenueRepo;
