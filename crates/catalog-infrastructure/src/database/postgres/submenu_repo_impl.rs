// ============================================================================
// Catalog Infrastructure - PostgreSQL Submenu Repository
// File: crates/catalog-infrastructure/src/database/postgres/submenu_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use catalog_core::domain::Submenu;
use catalog_core::error::DomainError;
use catalog_core::repositories::SubmenuRepository;

pub struct PgSubmenuRepository {
    pool: PgPool,
}

impl PgSubmenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SubmenuRow {
    pub id: Uuid,
    pub menu_id: Uuid,
    pub title: String,
    pub description: String,
}

impl From<SubmenuRow> for Submenu {
    fn from(row: SubmenuRow) -> Self {
        Submenu {
            id: row.id,
            menu_id: row.menu_id,
            title: row.title,
            description: row.description,
        }
    }
}

fn map_write_error(e: sqlx::Error, title: &str) -> DomainError {
    let msg = e.to_string();
    if msg.contains("unique") || msg.contains("duplicate") {
        DomainError::SubmenuTitleAlreadyExists(title.to_string())
    } else {
        DomainError::DatabaseError(msg)
    }
}

#[async_trait]
impl SubmenuRepository for PgSubmenuRepository {
    async fn list_by_menu(&self, menu_id: &Uuid) -> Result<Vec<Submenu>, DomainError> {
        let rows: Vec<SubmenuRow> = sqlx::query_as(
            r#"
            SELECT id, menu_id, title, description
            FROM submenus
            WHERE menu_id = $1
            "#,
        )
        .bind(menu_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing submenus: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_by_id(
        &self,
        menu_id: &Uuid,
        submenu_id: &Uuid,
    ) -> Result<Option<Submenu>, DomainError> {
        let row: Option<SubmenuRow> = sqlx::query_as(
            r#"
            SELECT id, menu_id, title, description
            FROM submenus
            WHERE id = $1 AND menu_id = $2
            "#,
        )
        .bind(submenu_id)
        .bind(menu_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding submenu by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, submenu: &Submenu) -> Result<Submenu, DomainError> {
        info!("Creating submenu: {}", submenu.title);

        let row: SubmenuRow = sqlx::query_as(
            r#"
            INSERT INTO submenus (id, menu_id, title, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, menu_id, title, description
            "#,
        )
        .bind(submenu.id)
        .bind(submenu.menu_id)
        .bind(&submenu.title)
        .bind(&submenu.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating submenu: {}", e);
            map_write_error(e, &submenu.title)
        })?;

        info!("Submenu created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, submenu: &Submenu) -> Result<Option<Submenu>, DomainError> {
        let row: Option<SubmenuRow> = sqlx::query_as(
            r#"
            UPDATE submenus
            SET title = $3, description = $4
            WHERE id = $1 AND menu_id = $2
            RETURNING id, menu_id, title, description
            "#,
        )
        .bind(submenu.id)
        .bind(submenu.menu_id)
        .bind(&submenu.title)
        .bind(&submenu.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating submenu: {}", e);
            map_write_error(e, &submenu.title)
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn delete(&self, menu_id: &Uuid, submenu_id: &Uuid) -> Result<(), DomainError> {
        info!("Deleting submenu: {}", submenu_id);

        sqlx::query("DELETE FROM submenus WHERE id = $1 AND menu_id = $2")
            .bind(submenu_id)
            .bind(menu_id)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting submenu: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }
}
