// ============================================================================
// Catalog Infrastructure - PostgreSQL Menu Repository
// File: crates/catalog-infrastructure/src/database/postgres/menu_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use catalog_core::domain::{Menu, MenuWithCounts};
use catalog_core::error::DomainError;
use catalog_core::repositories::MenuRepository;

pub struct PgMenuRepository {
    pool: PgPool,
}

impl PgMenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row types for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
}

#[derive(Debug, FromRow)]
struct MenuWithCountsRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub submenus_count: i64,
    pub dishes_count: i64,
}

impl From<MenuRow> for Menu {
    fn from(row: MenuRow) -> Self {
        Menu {
            id: row.id,
            title: row.title,
            description: row.description,
        }
    }
}

impl From<MenuWithCountsRow> for MenuWithCounts {
    fn from(row: MenuWithCountsRow) -> Self {
        MenuWithCounts {
            id: row.id,
            title: row.title,
            description: row.description,
            submenus_count: row.submenus_count,
            dishes_count: row.dishes_count,
        }
    }
}

fn map_write_error(e: sqlx::Error, title: &str) -> DomainError {
    let msg = e.to_string();
    if msg.contains("unique") || msg.contains("duplicate") {
        DomainError::MenuTitleAlreadyExists(title.to_string())
    } else {
        DomainError::DatabaseError(msg)
    }
}

#[async_trait]
impl MenuRepository for PgMenuRepository {
    async fn list(&self) -> Result<Vec<MenuWithCounts>, DomainError> {
        let rows: Vec<MenuWithCountsRow> = sqlx::query_as(
            r#"
            SELECT
                m.id, m.title, m.description,
                COUNT(DISTINCT s.id) AS submenus_count,
                COUNT(DISTINCT d.id) AS dishes_count
            FROM menus m
            LEFT JOIN submenus s ON s.menu_id = m.id
            LEFT JOIN dishes d ON d.submenu_id = s.id
            GROUP BY m.id, m.title, m.description
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing menus: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MenuWithCounts>, DomainError> {
        let row: Option<MenuWithCountsRow> = sqlx::query_as(
            r#"
            SELECT
                m.id, m.title, m.description,
                COUNT(DISTINCT s.id) AS submenus_count,
                COUNT(DISTINCT d.id) AS dishes_count
            FROM menus m
            LEFT JOIN submenus s ON s.menu_id = m.id
            LEFT JOIN dishes d ON d.submenu_id = s.id
            WHERE m.id = $1
            GROUP BY m.id, m.title, m.description
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding menu by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, menu: &Menu) -> Result<Menu, DomainError> {
        info!("Creating menu: {}", menu.title);

        let row: MenuRow = sqlx::query_as(
            r#"
            INSERT INTO menus (id, title, description)
            VALUES ($1, $2, $3)
            RETURNING id, title, description
            "#,
        )
        .bind(menu.id)
        .bind(&menu.title)
        .bind(&menu.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating menu: {}", e);
            map_write_error(e, &menu.title)
        })?;

        info!("Menu created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, menu: &Menu) -> Result<Option<Menu>, DomainError> {
        let row: Option<MenuRow> = sqlx::query_as(
            r#"
            UPDATE menus
            SET title = $2, description = $3
            WHERE id = $1
            RETURNING id, title, description
            "#,
        )
        .bind(menu.id)
        .bind(&menu.title)
        .bind(&menu.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating menu: {}", e);
            map_write_error(e, &menu.title)
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        info!("Deleting menu: {}", id);

        sqlx::query("DELETE FROM menus WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting menu: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }
}
