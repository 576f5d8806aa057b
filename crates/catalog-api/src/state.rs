use std::sync::Arc;

use catalog_core::repositories::{DishRepository, MenuRepository, SubmenuRepository};

#[derive(Clone)]
pub struct AppState {
    pub menus: Arc<dyn MenuRepository>,
    pub submenus: Arc<dyn SubmenuRepository>,
    pub dishes: Arc<dyn DishRepository>,
}
