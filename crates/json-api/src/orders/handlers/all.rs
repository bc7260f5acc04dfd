//! All Orders Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    envelope::Envelope,
    errors::ApiError,
    extensions::*,
    orders::{handlers::index_mine::OrdersResponse, into_api_error},
    state::State,
};

/// All Orders Handler
///
/// Returns every order in the system, newest first. Admin only.
#[endpoint(
    tags("orders"),
    summary = "List all orders",
    security(("bearer_auth" = [])),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Envelope<OrdersResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let orders = state
        .app
        .orders
        .list_all()
        .await
        .map_err(into_api_error)?;

    Ok(Json(Envelope::data(OrdersResponse {
        orders: orders.into_iter().map(Into::into).collect(),
    })))
}
