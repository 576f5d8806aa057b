//! Menu domain entity

use catalog_shared::types::{new_id, EntityId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    pub id: EntityId,
    pub title: String,
    pub description: String,
}

impl Menu {
    pub fn new(title: String, description: String) -> Self {
        Self {
            id: new_id(),
            title,
            description,
        }
    }
}

/// Menu annotated with the number of reachable submenus and dishes.
///
/// Counts are computed by the repository with an outer-join aggregate and are
/// zero for a childless menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuWithCounts {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub submenus_count: i64,
    pub dishes_count: i64,
}
