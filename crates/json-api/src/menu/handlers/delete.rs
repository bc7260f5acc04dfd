//! Delete Menu Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    envelope::Envelope, errors::ApiError, extensions::*, menu::into_api_error, state::State,
};

/// Delete Menu Item Handler
///
/// Removes a dish from the menu. Admin only. Past orders keep their
/// snapshot of the dish.
#[endpoint(
    tags("menu"),
    summary = "Delete a menu item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NOT_FOUND, description = "Menu item not found"),
    ),
)]
pub(crate) async fn handler(
    item: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<Envelope<String>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .menu
        .delete(item.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(Envelope::message("Menu item deleted")))
}

#[cfg(test)]
mod tests {
    use kore_app::domain::menu::{MenuServiceError, MockMenuService, models::MenuItemUuid};
    use salvo::test::TestClient;
    use testresult::TestResult;

    use crate::test_helpers::menu_admin_service;

    use super::*;

    fn make_service(menu: MockMenuService) -> Service {
        menu_admin_service(menu, Router::with_path("menu/{item}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_returns_200() -> TestResult {
        let uuid = MenuItemUuid::new();

        let mut menu = MockMenuService::new();

        menu.expect_delete()
            .once()
            .withf(move |item| *item == uuid)
            .return_once(|_| Ok(()));

        let res = TestClient::delete(format!("http://example.com/menu/{uuid}"))
            .send(&make_service(menu))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_item_returns_404() -> TestResult {
        let uuid = MenuItemUuid::new();

        let mut menu = MockMenuService::new();

        menu.expect_delete()
            .once()
            .return_once(|_| Err(MenuServiceError::NotFound));

        let res = TestClient::delete(format!("http://example.com/menu/{uuid}"))
            .send(&make_service(menu))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
