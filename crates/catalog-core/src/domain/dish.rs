//! Dish domain entity

use catalog_shared::types::{new_id, EntityId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    pub id: EntityId,
    pub submenu_id: EntityId,
    pub title: String,
    pub description: String,
    pub price: f64,
}

impl Dish {
    pub fn new(submenu_id: EntityId, title: String, description: String, price: f64) -> Self {
        Self {
            id: new_id(),
            submenu_id,
            title,
            description,
            price,
        }
    }
}
