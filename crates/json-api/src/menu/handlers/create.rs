//! Create Menu Item Handler

use std::sync::Arc;

use kore::Category;
use kore_app::domain::menu::models::NewMenuItem;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    envelope::Envelope,
    errors::ApiError,
    extensions::*,
    menu::{MenuItemResponse, into_api_error, models::parse_price},
    state::State,
};

/// New Menu Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateMenuItemRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub is_vegetarian: bool,
    pub image_url: Option<String>,
}

impl CreateMenuItemRequest {
    fn into_new_item(self) -> Result<NewMenuItem, ApiError> {
        let category = self.category.parse::<Category>().map_err(|_ignored| {
            ApiError::bad_request(format!("Unknown category: {}", self.category))
        })?;

        Ok(NewMenuItem {
            name: self.name,
            description: self.description,
            price: parse_price(self.price)?,
            category,
            is_vegetarian: self.is_vegetarian,
            image_url: self.image_url,
        })
    }
}

/// Create Menu Item Handler
///
/// Adds a dish to the menu. Admin only.
#[endpoint(
    tags("menu"),
    summary = "Create a menu item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Dish created"),
        (status_code = StatusCode::CONFLICT, description = "A dish with that name already exists"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateMenuItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<Envelope<MenuItemResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = state
        .app
        .menu
        .create(json.into_inner().into_new_item()?)
        .await
        .map_err(into_api_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(Envelope::data(item.into())))
}

#[cfg(test)]
mod tests {
    use kore_app::domain::menu::{MenuServiceError, MockMenuService, models::MenuItemUuid};
    use rust_decimal::dec;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::{make_menu_item, menu_admin_service};

    use super::*;

    fn make_service(menu: MockMenuService) -> Service {
        menu_admin_service(menu, Router::with_path("menu").post(handler))
    }

    #[tokio::test]
    async fn test_create_returns_201() -> TestResult {
        let uuid = MenuItemUuid::new();

        let mut menu = MockMenuService::new();

        menu.expect_create()
            .once()
            .withf(|item| {
                item.name == "Grilled Salmon"
                    && item.price == dec!(24.99)
                    && item.category == Category::MainCourse
            })
            .return_once(move |_| Ok(make_menu_item(uuid)));

        let mut res = TestClient::post("http://example.com/menu")
            .json(&json!({
                "name": "Grilled Salmon",
                "description": "Fresh Atlantic salmon with lemon butter sauce",
                "price": 24.99,
                "category": "main-course",
            }))
            .send(&make_service(menu))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let body: Envelope<MenuItemResponse> = res.take_json().await?;

        assert_eq!(
            body.data.map(|item| item.uuid),
            Some(uuid.into_uuid())
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_duplicate_name_returns_409() -> TestResult {
        let mut menu = MockMenuService::new();

        menu.expect_create()
            .once()
            .return_once(|_| Err(MenuServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/menu")
            .json(&json!({
                "name": "Grilled Salmon",
                "description": "Again",
                "price": 24.99,
                "category": "main-course",
            }))
            .send(&make_service(menu))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_negative_price_returns_400() -> TestResult {
        let mut menu = MockMenuService::new();

        menu.expect_create().never();

        let res = TestClient::post("http://example.com/menu")
            .json(&json!({
                "name": "Free Lunch",
                "description": "No such thing",
                "price": -1.0,
                "category": "main-course",
            }))
            .send(&make_service(menu))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_unknown_category_returns_400() -> TestResult {
        let mut menu = MockMenuService::new();

        menu.expect_create().never();

        let res = TestClient::post("http://example.com/menu")
            .json(&json!({
                "name": "Mystery Dish",
                "description": "From nowhere",
                "price": 5.0,
                "category": "snacks",
            }))
            .send(&make_service(menu))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
