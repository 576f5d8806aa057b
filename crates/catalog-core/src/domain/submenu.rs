//! Submenu domain entity

use catalog_shared::types::{new_id, EntityId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submenu {
    pub id: EntityId,
    pub menu_id: EntityId,
    pub title: String,
    pub description: String,
}

impl Submenu {
    pub fn new(menu_id: EntityId, title: String, description: String) -> Self {
        Self {
            id: new_id(),
            menu_id,
            title,
            description,
        }
    }
}
