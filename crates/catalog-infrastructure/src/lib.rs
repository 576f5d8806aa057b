//! # Catalog Infrastructure
//!
//! PostgreSQL adapters for the catalog repositories.

pub mod database;

pub use database::{create_pool, PgDishRepository, PgMenuRepository, PgSubmenuRepository};
