//! Dish repository trait (port)

use crate::domain::Dish;
use crate::error::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

/// Id-scoped operations filter on the dish id, the owning submenu id, and
/// the submenu's parent menu id (verified through a join).
#[async_trait]
pub trait DishRepository: Send + Sync {
    async fn list_by_submenu(
        &self,
        menu_id: &Uuid,
        submenu_id: &Uuid,
    ) -> Result<Vec<Dish>, DomainError>;

    async fn find_by_id(
        &self,
        menu_id: &Uuid,
        submenu_id: &Uuid,
        dish_id: &Uuid,
    ) -> Result<Option<Dish>, DomainError>;

    async fn create(&self, dish: &Dish) -> Result<Dish, DomainError>;

    async fn update(&self, menu_id: &Uuid, dish: &Dish) -> Result<Option<Dish>, DomainError>;

    async fn delete(
        &self,
        menu_id: &Uuid,
        submenu_id: &Uuid,
        dish_id: &Uuid,
    ) -> Result<(), DomainError>;
}
