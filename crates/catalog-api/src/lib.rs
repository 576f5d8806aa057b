//! # Catalog API
//!
//! HTTP handlers, DTOs, error mapping, and router assembly.

pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
