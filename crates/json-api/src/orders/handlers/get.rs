//! Get Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    envelope::Envelope,
    errors::ApiError,
    extensions::*,
    orders::{OrderResponse, into_api_error},
    state::State,
};

/// Get Order Handler
///
/// Returns an order. Owners see their own; admins see any.
#[endpoint(
    tags("orders"),
    summary = "Get an order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::FORBIDDEN, description = "Order belongs to another user"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<Envelope<OrderResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let current = depot.current_user_or_401()?;

    let order = state
        .app
        .orders
        .get(current, order.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(Envelope::data(order.into())))
}

#[cfg(test)]
mod tests {
    use kore::OrderStatus;
    use kore_app::domain::orders::{MockOrderService, OrderServiceError, models::OrderUuid};
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{TEST_USER_UUID, make_order, orders_service};

    use super::*;

    fn make_service(orders: MockOrderService) -> Service {
        orders_service(orders, Router::with_path("orders/{order}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_own_order() -> TestResult {
        let uuid = OrderUuid::new();

        let mut orders = MockOrderService::new();

        orders
            .expect_get()
            .once()
            .withf(move |requester, order| requester.uuid == TEST_USER_UUID && *order == uuid)
            .return_once(move |requester, order| {
                Ok(make_order(order, requester.uuid, OrderStatus::Confirmed))
            });

        let mut res = TestClient::get(format!("http://example.com/orders/{uuid}"))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Envelope<OrderResponse> = res.take_json().await?;

        assert_eq!(body.data.map(|order| order.uuid), Some(uuid.into_uuid()));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_someone_elses_order_returns_403() -> TestResult {
        let uuid = OrderUuid::new();

        let mut orders = MockOrderService::new();

        orders
            .expect_get()
            .once()
            .return_once(|_, _| Err(OrderServiceError::Forbidden));

        let res = TestClient::get(format!("http://example.com/orders/{uuid}"))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_order_returns_404() -> TestResult {
        let uuid = OrderUuid::new();

        let mut orders = MockOrderService::new();

        orders
            .expect_get()
            .once()
            .return_once(|_, _| Err(OrderServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/orders/{uuid}"))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
