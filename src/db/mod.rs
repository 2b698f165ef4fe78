//! Database layer - connection handle and repositories
//!
//! # Design Principles
//!
//! - One process-wide [`Store`] created at startup; the driver pools
//!   connections internally - no connect-per-operation
//! - Connectivity failures are a typed error ([`StoreError::Unavailable`]),
//!   not a log line callers never see
//! - Each write is independent; no transactions span operations

pub mod repos;
pub mod seed;
pub mod store;

pub use repos::{EventRepo, VenueRepo};
pub use store::{Store, StoreError};
