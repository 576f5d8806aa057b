//! PostgreSQL repository implementations

pub mod dish_repo_impl;
pub mod menu_repo_impl;
pub mod submenu_repo_impl;

pub use dish_repo_impl::PgDishRepository;
pub use menu_repo_impl::PgMenuRepository;
pub use submenu_repo_impl::PgSubmenuRepository;
