//! Update Order Status Handler

use std::sync::Arc;

use kore::OrderStatus;
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
    orders::{OrderResponse, into_api_error},
    state::State,
};

/// Status Update Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateStatusRequest {
    pub status: String,
}

/// Update Order Status Handler
///
/// Moves an order through its lifecycle. Admin only; the transition
/// rules still apply, so e.g. a cancelled order cannot be revived.
#[endpoint(
    tags("orders"),
    summary = "Update an order's status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status or disallowed transition"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<UpdateStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<Envelope<OrderResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let requested = json.into_inner().status;

    let status = requested
        .parse::<OrderStatus>()
        .map_err(|_ignored| ApiError::bad_request(format!("Unknown status: {requested}")))?;

    let updated = state
        .app
        .orders
        .update_status(order.into_inner().into(), status)
        .await
        .map_err(into_api_error)?;

    Ok(Json(Envelope::data(updated.into())))
}

#[cfg(test)]
mod tests {
    use kore::TransitionError;
    use kore_app::domain::orders::{MockOrderService, OrderServiceError, models::OrderUuid};
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::{TEST_USER_UUID, make_order, orders_admin_service};

    use super::*;

    fn make_service(orders: MockOrderService) -> Service {
        orders_admin_service(orders, Router::with_path("orders/{order}").patch(handler))
    }

    #[tokio::test]
    async fn test_update_status_moves_order_forward() -> TestResult {
        let uuid = OrderUuid::new();

        let mut orders = MockOrderService::new();

        orders
            .expect_update_status()
            .once()
            .withf(move |order, status| *order == uuid && *status == OrderStatus::Confirmed)
            .return_once(|order, status| Ok(make_order(order, TEST_USER_UUID, status)));

        let mut res = TestClient::patch(format!("http://example.com/orders/{uuid}"))
            .json(&json!({ "status": "confirmed" }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Envelope<OrderResponse> = res.take_json().await?;

        assert_eq!(
            body.data.map(|order| order.status).as_deref(),
            Some("confirmed")
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_update_status_unknown_status_returns_400() -> TestResult {
        let uuid = OrderUuid::new();

        let mut orders = MockOrderService::new();

        orders.expect_update_status().never();

        let res = TestClient::patch(format!("http://example.com/orders/{uuid}"))
            .json(&json!({ "status": "teleported" }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_cancelled_order_returns_400() -> TestResult {
        let uuid = OrderUuid::new();

        let mut orders = MockOrderService::new();

        orders
            .expect_update_status()
            .once()
            .return_once(|_, _| Err(OrderServiceError::Transition(TransitionError::Frozen)));

        let res = TestClient::patch(format!("http://example.com/orders/{uuid}"))
            .json(&json!({ "status": "confirmed" }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
