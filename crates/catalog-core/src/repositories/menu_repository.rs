//! Menu repository trait (port)

use crate::domain::{Menu, MenuWithCounts};
use crate::error::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// All menus with their submenu/dish counts.
    async fn list(&self) -> Result<Vec<MenuWithCounts>, DomainError>;

    /// One menu with counts, or `None` when the id has no row.
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MenuWithCounts>, DomainError>;

    async fn create(&self, menu: &Menu) -> Result<Menu, DomainError>;

    /// Full replacement of title and description. `None` when the id has no row.
    async fn update(&self, menu: &Menu) -> Result<Option<Menu>, DomainError>;

    /// Unconditional delete; succeeds whether or not a row existed.
    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;
}
