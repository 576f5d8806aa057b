//! Submenu repository trait (port)

use crate::domain::Submenu;
use crate::error::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

/// All id-scoped operations filter on both the submenu id and the parent
/// menu id, so a submenu is never reachable through the wrong menu.
#[async_trait]
pub trait SubmenuRepository: Send + Sync {
    async fn list_by_menu(&self, menu_id: &Uuid) -> Result<Vec<Submenu>, DomainError>;

    async fn find_by_id(
        &self,
        menu_id: &Uuid,
        submenu_id: &Uuid,
    ) -> Result<Option<Submenu>, DomainError>;

    async fn create(&self, submenu: &Submenu) -> Result<Submenu, DomainError>;

    async fn update(&self, submenu: &Submenu) -> Result<Option<Submenu>, DomainError>;

    async fn delete(&self, menu_id: &Uuid, submenu_id: &Uuid) -> Result<(), DomainError>;
}
