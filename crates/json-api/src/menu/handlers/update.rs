//! Update Menu Item Handler

use std::sync::Arc;

use kore::Category;
use kore_app::domain::menu::models::MenuItemUpdate;
use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    envelope::Envelope,
    errors::ApiError,
    extensions::*,
    menu::{MenuItemResponse, into_api_error, models::parse_price},
    state::State,
};

/// Menu Item Update Request
///
/// Omitted fields are left unchanged.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateMenuItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub is_vegetarian: Option<bool>,
    pub image_url: Option<String>,
}

impl UpdateMenuItemRequest {
    fn into_update(self) -> Result<MenuItemUpdate, ApiError> {
        let category = self
            .category
            .map(|value| {
                value
                    .parse::<Category>()
                    .map_err(|_ignored| ApiError::bad_request(format!("Unknown category: {value}")))
            })
            .transpose()?;

        Ok(MenuItemUpdate {
            name: self.name,
            description: self.description,
            price: self.price.map(parse_price).transpose()?,
            category,
            is_vegetarian: self.is_vegetarian,
            image_url: self.image_url,
        })
    }
}

/// Update Menu Item Handler
///
/// Applies a partial update to a dish. Admin only.
#[endpoint(
    tags("menu"),
    summary = "Update a menu item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NOT_FOUND, description = "Menu item not found"),
    ),
)]
pub(crate) async fn handler(
    item: PathParam<Uuid>,
    json: JsonBody<UpdateMenuItemRequest>,
    depot: &mut Depot,
) -> Result<Json<Envelope<MenuItemResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let updated = state
        .app
        .menu
        .update(item.into_inner().into(), json.into_inner().into_update()?)
        .await
        .map_err(into_api_error)?;

    Ok(Json(Envelope::data(updated.into())))
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
        menu_admin_service(menu, Router::with_path("menu/{item}").put(handler))
    }

    #[tokio::test]
    async fn test_update_forwards_only_provided_fields() -> TestResult {
        let uuid = MenuItemUuid::new();

        let mut menu = MockMenuService::new();

        menu.expect_update()
            .once()
            .withf(move |item, update| {
                *item == uuid
                    && update.price == Some(dec!(19.99))
                    && update.name.is_none()
                    && update.category.is_none()
            })
            .return_once(move |_, _| {
                Ok(kore_app::domain::menu::models::MenuItem {
                    price: dec!(19.99),
                    ..make_menu_item(uuid)
                })
            });

        let mut res = TestClient::put(format!("http://example.com/menu/{uuid}"))
            .json(&json!({ "price": 19.99 }))
            .send(&make_service(menu))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Envelope<MenuItemResponse> = res.take_json().await?;

        assert_eq!(body.data.map(|item| item.price), Some(19.99));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_item_returns_404() -> TestResult {
        let uuid = MenuItemUuid::new();

        let mut menu = MockMenuService::new();

        menu.expect_update()
            .once()
            .return_once(|_, _| Err(MenuServiceError::NotFound));

        let res = TestClient::put(format!("http://example.com/menu/{uuid}"))
            .json(&json!({ "name": "Renamed" }))
            .send(&make_service(menu))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_category_returns_400() -> TestResult {
        let uuid = MenuItemUuid::new();

        let mut menu = MockMenuService::new();

        menu.expect_update().never();

        let res = TestClient::put(format!("http://example.com/menu/{uuid}"))
            .json(&json!({ "category": "snacks" }))
            .send(&make_service(menu))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
