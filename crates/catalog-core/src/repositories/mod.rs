//! Repository traits (ports)

pub mod dish_repository;
pub mod menu_repository;
pub mod submenu_repository;

pub use dish_repository::DishRepository;
pub use menu_repository::MenuRepository;
pub use submenu_repository::SubmenuRepository;
