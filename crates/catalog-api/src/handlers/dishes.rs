// ============================================================================
// Catalog API - Dish Handlers
// File: crates/catalog-api/src/handlers/dishes.rs
// ============================================================================
//! Dish HTTP handlers, nested under a menu/submenu pair

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catalog_core::domain::Dish;
use catalog_core::error::DomainError;
use catalog_shared::utils::round_price;

use crate::error::ApiError;
use crate::response::StatusResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DishPayload {
    pub title: String,
    pub description: String,
    pub price: f64,
}

#[derive(Debug, Serialize)]
pub struct DishResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
}

impl From<Dish> for DishResponse {
    fn from(dish: Dish) -> Self {
        Self {
            id: dish.id,
            title: dish.title,
            description: dish.description,
            price: dish.price,
        }
    }
}

impl DishResponse {
    /// Listing variant: price rounded to two decimal places.
    fn rounded(dish: Dish) -> Self {
        let mut response = Self::from(dish);
        response.price = round_price(response.price);
        response
    }
}

/// GET /api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes
pub async fn list_dishes(
    State(state): State<AppState>,
    Path((menu_id, submenu_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Vec<DishResponse>>, ApiError> {
    let dishes = state.dishes.list_by_submenu(&menu_id, &submenu_id).await?;
    Ok(Json(dishes.into_iter().map(DishResponse::rounded).collect()))
}

/// GET /api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}
pub async fn get_dish(
    State(state): State<AppState>,
    Path((menu_id, submenu_id, dish_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<Json<DishResponse>, ApiError> {
    let dish = state
        .dishes
        .find_by_id(&menu_id, &submenu_id, &dish_id)
        .await?
        .ok_or(DomainError::DishNotFound)?;
    Ok(Json(dish.into()))
}

/// POST /api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes
///
/// Returns the stored price as-is; rounding applies to listings only.
pub async fn create_dish(
    State(state): State<AppState>,
    Path((_menu_id, submenu_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<DishPayload>,
) -> Result<(StatusCode, Json<DishResponse>), ApiError> {
    let dish = Dish::new(submenu_id, payload.title, payload.description, payload.price);
    let created = state.dishes.create(&dish).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// PATCH /api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}
pub async fn update_dish(
    State(state): State<AppState>,
    Path((menu_id, submenu_id, dish_id)): Path<(Uuid, Uuid, Uuid)>,
    Json(payload): Json<DishPayload>,
) -> Result<Json<DishResponse>, ApiError> {
    let dish = Dish {
        id: dish_id,
        submenu_id,
        title: payload.title,
        description: payload.description,
        price: payload.price,
    };
    let updated = state
        .dishes
        .update(&menu_id, &dish)
        .await?
        .ok_or(DomainError::DishNotFound)?;
    Ok(Json(updated.into()))
}

/// DELETE /api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}
pub async fn delete_dish(
    State(state): State<AppState>,
    Path((menu_id, submenu_id, dish_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<Json<StatusResponse>, ApiError> {
    state.dishes.delete(&menu_id, &submenu_id, &dish_id).await?;
    Ok(Json(StatusResponse::success()))
}
