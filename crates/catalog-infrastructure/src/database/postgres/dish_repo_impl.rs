// ============================================================================
// Catalog Infrastructure - PostgreSQL Dish Repository
// File: crates/catalog-infrastructure/src/database/postgres/dish_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use catalog_core::domain::Dish;
use catalog_core::error::DomainError;
use catalog_core::repositories::DishRepository;

pub struct PgDishRepository {
    pool: PgPool,
}

impl PgDishRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DishRow {
    pub id: Uuid,
    pub submenu_id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
}

impl From<DishRow> for Dish {
    fn from(row: DishRow) -> Self {
        Dish {
            id: row.id,
            submenu_id: row.submenu_id,
            title: row.title,
            description: row.description,
            price: row.price,
        }
    }
}

fn map_write_error(e: sqlx::Error, title: &str) -> DomainError {
    let msg = e.to_string();
    if msg.contains("unique") || msg.contains("duplicate") {
        DomainError::DishTitleAlreadyExists(title.to_string())
    } else {
        DomainError::DatabaseError(msg)
    }
}

#[async_trait]
impl DishRepository for PgDishRepository {
    async fn list_by_submenu(
        &self,
        menu_id: &Uuid,
        submenu_id: &Uuid,
    ) -> Result<Vec<Dish>, DomainError> {
        let rows: Vec<DishRow> = sqlx::query_as(
            r#"
            SELECT d.id, d.submenu_id, d.title, d.description, d.price
            FROM dishes d
            JOIN submenus s ON s.id = d.submenu_id
            WHERE d.submenu_id = $1 AND s.menu_id = $2
            "#,
        )
        .bind(submenu_id)
        .bind(menu_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing dishes: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_by_id(
        &self,
        menu_id: &Uuid,
        submenu_id: &Uuid,
        dish_id: &Uuid,
    ) -> Result<Option<Dish>, DomainError> {
        let row: Option<DishRow> = sqlx::query_as(
            r#"
            SELECT d.id, d.submenu_id, d.title, d.description, d.price
            FROM dishes d
            JOIN submenus s ON s.id = d.submenu_id
            WHERE d.id = $1 AND d.submenu_id = $2 AND s.menu_id = $3
            "#,
        )
        .bind(dish_id)
        .bind(submenu_id)
        .bind(menu_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding dish by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, dish: &Dish) -> Result<Dish, DomainError> {
        info!("Creating dish: {}", dish.title);

        let row: DishRow = sqlx::query_as(
            r#"
            INSERT INTO dishes (id, submenu_id, title, description, price)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, submenu_id, title, description, price
            "#,
        )
        .bind(dish.id)
        .bind(dish.submenu_id)
        .bind(&dish.title)
        .bind(&dish.description)
        .bind(dish.price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating dish: {}", e);
            map_write_error(e, &dish.title)
        })?;

        info!("Dish created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, menu_id: &Uuid, dish: &Dish) -> Result<Option<Dish>, DomainError> {
        let row: Option<DishRow> = sqlx::query_as(
            r#"
            UPDATE dishes d
            SET title = $4, description = $5, price = $6
            FROM submenus s
            WHERE d.id = $1 AND d.submenu_id = $2
              AND s.id = d.submenu_id AND s.menu_id = $3
            RETURNING d.id, d.submenu_id, d.title, d.description, d.price
            "#,
        )
        .bind(dish.id)
        .bind(dish.submenu_id)
        .bind(menu_id)
        .bind(&dish.title)
        .bind(&dish.description)
        .bind(dish.price)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating dish: {}", e);
            map_write_error(e, &dish.title)
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn delete(
        &self,
        menu_id: &Uuid,
        submenu_id: &Uuid,
        dish_id: &Uuid,
    ) -> Result<(), DomainError> {
        info!("Deleting dish: {}", dish_id);

        sqlx::query(
            r#"
            DELETE FROM dishes d
            USING submenus s
            WHERE d.id = $1 AND d.submenu_id = $2
              AND s.id = d.submenu_id AND s.menu_id = $3
            "#,
        )
        .bind(dish_id)
        .bind(submenu_id)
        .bind(menu_id)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error deleting dish: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }
}
