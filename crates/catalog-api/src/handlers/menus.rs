// ============================================================================
// Catalog API - Menu Handlers
// File: crates/catalog-api/src/handlers/menus.rs
// ============================================================================
//! Menu HTTP handlers (list, get, create, update, delete)

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catalog_core::domain::{Menu, MenuWithCounts};
use catalog_core::error::DomainError;

use crate::error::ApiError;
use crate::response::StatusResponse;
use crate::state::AppState;

/// Create/update payload. PATCH is a full replacement of both fields.
#[derive(Debug, Deserialize)]
pub struct MenuPayload {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
}

impl From<Menu> for MenuResponse {
    fn from(menu: Menu) -> Self {
        Self {
            id: menu.id,
            title: menu.title,
            description: menu.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MenuWithCountsResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub submenus_count: i64,
    pub dishes_count: i64,
}

impl From<MenuWithCounts> for MenuWithCountsResponse {
    fn from(menu: MenuWithCounts) -> Self {
        Self {
            id: menu.id,
            title: menu.title,
            description: menu.description,
            submenus_count: menu.submenus_count,
            dishes_count: menu.dishes_count,
        }
    }
}

/// GET /api/v1/menus
pub async fn list_menus(
    State(state): State<AppState>,
) -> Result<Json<Vec<MenuWithCountsResponse>>, ApiError> {
    let menus = state.menus.list().await?;
    Ok(Json(menus.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/menus/{menu_id}
pub async fn get_menu(
    State(state): State<AppState>,
    Path(menu_id): Path<Uuid>,
) -> Result<Json<MenuWithCountsResponse>, ApiError> {
    let menu = state
        .menus
        .find_by_id(&menu_id)
        .await?
        .ok_or(DomainError::MenuNotFound)?;
    Ok(Json(menu.into()))
}

/// POST /api/v1/menus
pub async fn create_menu(
    State(state): State<AppState>,
    Json(payload): Json<MenuPayload>,
) -> Result<(StatusCode, Json<MenuResponse>), ApiError> {
    let menu = Menu::new(payload.title, payload.description);
    let created = state.menus.create(&menu).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// PATCH /api/v1/menus/{menu_id}
pub async fn update_menu(
    State(state): State<AppState>,
    Path(menu_id): Path<Uuid>,
    Json(payload): Json<MenuPayload>,
) -> Result<Json<MenuResponse>, ApiError> {
    let menu = Menu {
        id: menu_id,
        title: payload.title,
        description: payload.description,
    };
    let updated = state
        .menus
        .update(&menu)
        .await?
        .ok_or(DomainError::MenuNotFound)?;
    Ok(Json(updated.into()))
}

/// DELETE /api/v1/menus/{menu_id}
///
/// Always reports success, whether or not a row existed. Children go with
/// the menu via the cascade constraints.
pub async fn delete_menu(
    State(state): State<AppState>,
    Path(menu_id): Path<Uuid>,
) -> Result<Json<StatusResponse>, ApiError> {
    state.menus.delete(&menu_id).await?;
    Ok(Json(StatusResponse::success()))
}
