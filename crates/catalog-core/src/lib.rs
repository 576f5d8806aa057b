//! # Catalog Core
//!
//! Domain entities, repository traits, and domain errors for the catalog API.

pub mod domain;
pub mod error;
pub mod repositories;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
