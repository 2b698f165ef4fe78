//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses
//! - Static file fallback from the public directory

pub mod error;
pub mod routes;
pub mod server;
pub mod views;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig};
