//! Cancel Order Handler

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

/// Cancel Order Handler
///
/// Cancels the current user's own order. Allowed only while the order
/// is pending or confirmed.
#[endpoint(
    tags("orders"),
    summary = "Cancel my order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::BAD_REQUEST, description = "Too late to cancel"),
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

    let cancelled = state
        .app
        .orders
        .cancel(current.uuid, order.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(Envelope::data(cancelled.into())))
}
