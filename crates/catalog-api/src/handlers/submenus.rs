// ============================================================================
// Catalog API - Submenu Handlers
// File: crates/catalog-api/src/handlers/submenus.rs
// ============================================================================
//! Submenu HTTP handlers, nested under a parent menu

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catalog_core::domain::Submenu;
use catalog_core::error::DomainError;

use crate::error::ApiError;
use crate::response::StatusResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmenuPayload {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct SubmenuResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
}

impl From<Submenu> for SubmenuResponse {
    fn from(submenu: Submenu) -> Self {
        Self {
            id: submenu.id,
            title: submenu.title,
            description: submenu.description,
        }
    }
}

/// GET /api/v1/menus/{menu_id}/submenus
pub async fn list_submenus(
    State(state): State<AppState>,
    Path(menu_id): Path<Uuid>,
) -> Result<Json<Vec<SubmenuResponse>>, ApiError> {
    let submenus = state.submenus.list_by_menu(&menu_id).await?;
    Ok(Json(submenus.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/menus/{menu_id}/submenus/{submenu_id}
pub async fn get_submenu(
    State(state): State<AppState>,
    Path((menu_id, submenu_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<SubmenuResponse>, ApiError> {
    let submenu = state
        .submenus
        .find_by_id(&menu_id, &submenu_id)
        .await?
        .ok_or(DomainError::SubmenuNotFound)?;
    Ok(Json(submenu.into()))
}

/// POST /api/v1/menus/{menu_id}/submenus
pub async fn create_submenu(
    State(state): State<AppState>,
    Path(menu_id): Path<Uuid>,
    Json(payload): Json<SubmenuPayload>,
) -> Result<(StatusCode, Json<SubmenuResponse>), ApiError> {
    let submenu = Submenu::new(menu_id, payload.title, payload.description);
    let created = state.submenus.create(&submenu).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// PATCH /api/v1/menus/{menu_id}/submenus/{submenu_id}
pub async fn update_submenu(
    State(state): State<AppState>,
    Path((menu_id, submenu_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<SubmenuPayload>,
) -> Result<Json<SubmenuResponse>, ApiError> {
    let submenu = Submenu {
        id: submenu_id,
        menu_id,
        title: payload.title,
        description: payload.description,
    };
    let updated = state
        .submenus
        .update(&submenu)
        .await?
        .ok_or(DomainError::SubmenuNotFound)?;
    Ok(Json(updated.into()))
}

/// DELETE /api/v1/menus/{menu_id}/submenus/{submenu_id}
pub async fn delete_submenu(
    State(state): State<AppState>,
    Path((menu_id, submenu_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<StatusResponse>, ApiError> {
    state.submenus.delete(&menu_id, &submenu_id).await?;
    Ok(Json(StatusResponse::success()))
}
