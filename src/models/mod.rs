//! Domain models with validation at construction
//!
//! Form input is validated when building the `New*` types. Invalid input
//! returns a [`ValidationError`], not a panic or a store-level failure.

pub mod event;
pub mod validation;
pub mod venue;

pub use event::{EventRecord, NewEvent};
pub use validation::ValidationError;
pub use venue::{NewVenue, VenueRecord};
