//! Domain entities

pub mod dish;
pub mod menu;
pub mod submenu;

pub use dish::Dish;
pub use menu::{Menu, MenuWithCounts};
pub use submenu::Submenu;
