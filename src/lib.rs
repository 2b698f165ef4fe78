//! eventboard: a small event and venue listing server
//!
//! Renders a homepage listing upcoming events and venues, accepts form
//! submissions to add new ones, and persists everything to MongoDB.
//! The HTTP layer lives in [`http`], the data access layer in [`db`].

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{AppConfig, ConfigError};
pub use db::{Store, StoreError};
pub use http::{build_router, run_server, AppState, ServerConfig};
