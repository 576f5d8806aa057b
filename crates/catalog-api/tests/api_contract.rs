//! Handler contract tests: mocked repositories behind the real router.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use mockall::mock;
use mockall::predicate::eq;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use catalog_api::{router, AppState};
use catalog_core::domain::{Dish, Menu, MenuWithCounts, Submenu};
use catalog_core::error::DomainError;
use catalog_core::repositories::{DishRepository, MenuRepository, SubmenuRepository};

mock! {
    pub Menus {}

    #[async_trait]
    impl MenuRepository for Menus {
        async fn list(&self) -> Result<Vec<MenuWithCounts>, DomainError>;
        async fn find_by_id(&self, id: &Uuid) -> Result<Option<MenuWithCounts>, DomainError>;
        async fn create(&self, menu: &Menu) -> Result<Menu, DomainError>;
        async fn update(&self, menu: &Menu) -> Result<Option<Menu>, DomainError>;
        async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;
    }
}

mock! {
    pub Submenus {}

    #[async_trait]
    impl SubmenuRepository for Submenus {
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
}

mock! {
    pub Dishes {}

    #[async_trait]
    impl DishRepository for Dishes {
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
}

fn app(menus: MockMenus, submenus: MockSubmenus, dishes: MockDishes) -> Router {
    router(AppState {
        menus: Arc::new(menus),
        submenus: Arc::new(submenus),
        dishes: Arc::new(dishes),
    })
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn list_menus_includes_counts() {
    let menu_id = Uuid::new_v4();
    let mut menus = MockMenus::new();
    menus.expect_list().returning(move || {
        Ok(vec![MenuWithCounts {
            id: menu_id,
            title: "Lunch".to_string(),
            description: "Midday".to_string(),
            submenus_count: 1,
            dishes_count: 3,
        }])
    });

    let response = app(menus, MockSubmenus::new(), MockDishes::new())
        .oneshot(get("/api/v1/menus"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!([{
            "id": menu_id.to_string(),
            "title": "Lunch",
            "description": "Midday",
            "submenus_count": 1,
            "dishes_count": 3,
        }])
    );
}

#[tokio::test]
async fn list_menus_reports_zero_counts_for_childless_menu() {
    let menu_id = Uuid::new_v4();
    let mut menus = MockMenus::new();
    menus.expect_list().returning(move || {
        Ok(vec![MenuWithCounts {
            id: menu_id,
            title: "Empty".to_string(),
            description: "No children".to_string(),
            submenus_count: 0,
            dishes_count: 0,
        }])
    });

    let response = app(menus, MockSubmenus::new(), MockDishes::new())
        .oneshot(get("/api/v1/menus"))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body[0]["submenus_count"], 0);
    assert_eq!(body[0]["dishes_count"], 0);
}

#[tokio::test]
async fn get_missing_menu_returns_404_with_fixed_message() {
    let menu_id = Uuid::new_v4();
    let mut menus = MockMenus::new();
    menus
        .expect_find_by_id()
        .with(eq(menu_id))
        .returning(|_| Ok(None));

    let response = app(menus, MockSubmenus::new(), MockDishes::new())
        .oneshot(get(&format!("/api/v1/menus/{menu_id}")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"detail": "menu not found"}));
}

#[tokio::test]
async fn create_menu_returns_201_with_created_record() {
    let mut menus = MockMenus::new();
    menus
        .expect_create()
        .returning(|menu: &Menu| Ok(menu.clone()));

    let response = app(menus, MockSubmenus::new(), MockDishes::new())
        .oneshot(json_request(
            "POST",
            "/api/v1/menus",
            json!({"title": "Lunch", "description": "Midday"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["title"], "Lunch");
    assert_eq!(body["description"], "Midday");
    assert!(Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn create_menu_with_missing_field_returns_422() {
    let response = app(MockMenus::new(), MockSubmenus::new(), MockDishes::new())
        .oneshot(json_request(
            "POST",
            "/api/v1/menus",
            json!({"title": "Lunch"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn update_missing_menu_returns_404() {
    let mut menus = MockMenus::new();
    menus.expect_update().returning(|_| Ok(None));

    let response = app(menus, MockSubmenus::new(), MockDishes::new())
        .oneshot(json_request(
            "PATCH",
            &format!("/api/v1/menus/{}", Uuid::new_v4()),
            json!({"title": "Renamed", "description": "Changed"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"detail": "menu not found"}));
}

#[tokio::test]
async fn update_menu_replaces_all_fields() {
    let menu_id = Uuid::new_v4();
    let mut menus = MockMenus::new();
    menus
        .expect_update()
        .withf(move |menu: &Menu| {
            menu.id == menu_id && menu.title == "Renamed" && menu.description == "Changed"
        })
        .returning(|menu: &Menu| Ok(Some(menu.clone())));

    let response = app(menus, MockSubmenus::new(), MockDishes::new())
        .oneshot(json_request(
            "PATCH",
            &format!("/api/v1/menus/{menu_id}"),
            json!({"title": "Renamed", "description": "Changed"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["title"], "Renamed");
}

#[tokio::test]
async fn delete_menu_always_reports_success() {
    let mut menus = MockMenus::new();
    menus.expect_delete().returning(|_| Ok(()));

    let response = app(menus, MockSubmenus::new(), MockDishes::new())
        .oneshot(delete(&format!("/api/v1/menus/{}", Uuid::new_v4())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "success"}));
}

#[tokio::test]
async fn duplicate_menu_title_returns_409() {
    let mut menus = MockMenus::new();
    menus
        .expect_create()
        .returning(|menu: &Menu| Err(DomainError::MenuTitleAlreadyExists(menu.title.clone())));

    let response = app(menus, MockSubmenus::new(), MockDishes::new())
        .oneshot(json_request(
            "POST",
            "/api/v1/menus",
            json!({"title": "Lunch", "description": "Midday"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(response).await,
        json!({"detail": "menu title already exists: Lunch"})
    );
}

#[tokio::test]
async fn database_failure_returns_generic_500() {
    let mut menus = MockMenus::new();
    menus
        .expect_list()
        .returning(|| Err(DomainError::DatabaseError("connection reset".to_string())));

    let response = app(menus, MockSubmenus::new(), MockDishes::new())
        .oneshot(get("/api/v1/menus"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    // The underlying error must not leak into the body.
    assert_eq!(
        body_json(response).await,
        json!({"detail": "internal server error"})
    );
}

#[tokio::test]
async fn get_submenu_filters_on_both_ids() {
    let menu_id = Uuid::new_v4();
    let submenu_id = Uuid::new_v4();
    let mut submenus = MockSubmenus::new();
    submenus
        .expect_find_by_id()
        .with(eq(menu_id), eq(submenu_id))
        .returning(|_, _| Ok(None));

    let response = app(MockMenus::new(), submenus, MockDishes::new())
        .oneshot(get(&format!("/api/v1/menus/{menu_id}/submenus/{submenu_id}")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({"detail": "submenu not found"})
    );
}

#[tokio::test]
async fn create_submenu_attaches_parent_from_path() {
    let menu_id = Uuid::new_v4();
    let mut submenus = MockSubmenus::new();
    submenus
        .expect_create()
        .withf(move |submenu: &Submenu| submenu.menu_id == menu_id)
        .returning(|submenu: &Submenu| Ok(submenu.clone()));

    let response = app(MockMenus::new(), submenus, MockDishes::new())
        .oneshot(json_request(
            "POST",
            &format!("/api/v1/menus/{menu_id}/submenus"),
            json!({"title": "Mains", "description": "Main dishes"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["title"], "Mains");
    // menu_id is internal linkage, not part of the response shape
    assert!(body.get("menu_id").is_none());
}

#[tokio::test]
async fn delete_submenu_scopes_to_parent_menu() {
    let menu_id = Uuid::new_v4();
    let submenu_id = Uuid::new_v4();
    let mut submenus = MockSubmenus::new();
    submenus
        .expect_delete()
        .with(eq(menu_id), eq(submenu_id))
        .returning(|_, _| Ok(()));

    let response = app(MockMenus::new(), submenus, MockDishes::new())
        .oneshot(delete(&format!(
            "/api/v1/menus/{menu_id}/submenus/{submenu_id}"
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "success"}));
}

#[tokio::test]
async fn list_dishes_rounds_price_to_two_decimals() {
    let menu_id = Uuid::new_v4();
    let submenu_id = Uuid::new_v4();
    let dish_id = Uuid::new_v4();
    let mut dishes = MockDishes::new();
    dishes
        .expect_list_by_submenu()
        .with(eq(menu_id), eq(submenu_id))
        .returning(move |_, _| {
            Ok(vec![Dish {
                id: dish_id,
                submenu_id,
                title: "Soup".to_string(),
                description: "Hot".to_string(),
                price: 5.999,
            }])
        });

    let response = app(MockMenus::new(), MockSubmenus::new(), dishes)
        .oneshot(get(&format!(
            "/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes"
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["price"], 6.0);
}

#[tokio::test]
async fn create_dish_returns_raw_price() {
    let menu_id = Uuid::new_v4();
    let submenu_id = Uuid::new_v4();
    let mut dishes = MockDishes::new();
    dishes
        .expect_create()
        .withf(move |dish: &Dish| dish.submenu_id == submenu_id)
        .returning(|dish: &Dish| Ok(dish.clone()));

    let response = app(MockMenus::new(), MockSubmenus::new(), dishes)
        .oneshot(json_request(
            "POST",
            &format!("/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes"),
            json!({"title": "Soup", "description": "Hot", "price": 5.999}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["price"], 5.999);
}

#[tokio::test]
async fn get_missing_dish_returns_404_with_fixed_message() {
    let menu_id = Uuid::new_v4();
    let submenu_id = Uuid::new_v4();
    let dish_id = Uuid::new_v4();
    let mut dishes = MockDishes::new();
    dishes
        .expect_find_by_id()
        .with(eq(menu_id), eq(submenu_id), eq(dish_id))
        .returning(|_, _, _| Ok(None));

    let response = app(MockMenus::new(), MockSubmenus::new(), dishes)
        .oneshot(get(&format!(
            "/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}"
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"detail": "dish not found"}));
}

#[tokio::test]
async fn update_missing_dish_returns_404() {
    let menu_id = Uuid::new_v4();
    let submenu_id = Uuid::new_v4();
    let dish_id = Uuid::new_v4();
    let mut dishes = MockDishes::new();
    dishes.expect_update().returning(|_, _| Ok(None));

    let response = app(MockMenus::new(), MockSubmenus::new(), dishes)
        .oneshot(json_request(
            "PATCH",
            &format!("/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}"),
            json!({"title": "Soup", "description": "Hot", "price": 4.5}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"detail": "dish not found"}));
}

#[tokio::test]
async fn health_check_reports_service() {
    let response = app(MockMenus::new(), MockSubmenus::new(), MockDishes::new())
        .oneshot(get("/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "catalog-api");
}
