//! Router assembly

use axum::routing::get;
use axum::Router;

use catalog_shared::constants::API_PREFIX;

use crate::handlers::{dishes, health, menus, submenus};
use crate::state::AppState;

/// Builds the application router with all catalog routes under the API
/// prefix plus the bare health check.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest(API_PREFIX, catalog_routes())
        .with_state(state)
}

fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/menus", get(menus::list_menus).post(menus::create_menu))
        .route(
            "/menus/{menu_id}",
            get(menus::get_menu)
                .patch(menus::update_menu)
                .delete(menus::delete_menu),
        )
        .route(
            "/menus/{menu_id}/submenus",
            get(submenus::list_submenus).post(submenus::create_submenu),
        )
        .route(
            "/menus/{menu_id}/submenus/{submenu_id}",
            get(submenus::get_submenu)
                .patch(submenus::update_submenu)
                .delete(submenus::delete_submenu),
        )
        .route(
            "/menus/{menu_id}/submenus/{submenu_id}/dishes",
            get(dishes::list_dishes).post(dishes::create_dish),
        )
        .route(
            "/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}",
            get(dishes::get_dish)
                .patch(dishes::update_dish)
                .delete(dishes::delete_dish),
        )
}
