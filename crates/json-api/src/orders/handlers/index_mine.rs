//! My Orders Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    envelope::Envelope,
    errors::ApiError,
    extensions::*,
    orders::{OrderResponse, into_api_error},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    /// The list of orders, newest first
    pub orders: Vec<OrderResponse>,
}

/// My Orders Handler
///
/// Returns the current user's orders, newest first.
#[endpoint(
    tags("orders"),
    summary = "List my orders",
    security(("bearer_auth" = [])),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Envelope<OrdersResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let current = depot.current_user_or_401()?;

    let orders = state
        .app
        .orders
        .list_for_user(current.uuid)
        .await
        .map_err(into_api_error)?;

    Ok(Json(Envelope::data(OrdersResponse {
        orders: orders.into_iter().map(Into::into).collect(),
    })))
}

#[cfg(test)]
mod tests {
    use kore::OrderStatus;
    use kore_app::domain::orders::{MockOrderService, models::OrderUuid};
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{TEST_USER_UUID, make_order, orders_service};

    use super::*;

    fn make_service(orders: MockOrderService) -> Service {
        orders_service(orders, Router::with_path("orders/me").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_only_callers_orders() -> TestResult {
        let uuid = OrderUuid::new();

        let mut orders = MockOrderService::new();

        orders
            .expect_list_for_user()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(move |user| Ok(vec![make_order(uuid, user, OrderStatus::Delivered)]));

        let mut res = TestClient::get("http://example.com/orders/me")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Envelope<OrdersResponse> = res.take_json().await?;
        let orders = body.data.ok_or("missing data")?.orders;

        assert_eq!(orders.len(), 1, "expected one order");
        assert_eq!(orders[0].status, "delivered");
        assert!(!orders[0].can_cancel);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut orders = MockOrderService::new();

        orders
            .expect_list_for_user()
            .once()
            .return_once(|_| Ok(vec![]));

        let mut res = TestClient::get("http://example.com/orders/me")
            .send(&make_service(orders))
            .await;

        let body: Envelope<OrdersResponse> = res.take_json().await?;

        assert!(body.data.ok_or("missing data")?.orders.is_empty());

        Ok(())
    }
}
