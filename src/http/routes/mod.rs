//! Route handlers organized by resource

pub mod events;
pub mod health;
pub mod home;
pub mod venues;
