//! Create Order Handler

use std::sync::Arc;

use kore_app::domain::orders::models::{NewOrder, NewOrderItem};
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
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

/// A requested order line.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderItemRequest {
    pub menu_item_uuid: Uuid,
    pub quantity: i32,
}

/// Order Placement Request
///
/// Prices and names are resolved server-side from the current menu;
/// clients only say what and how many.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderRequest {
    pub items: Vec<CreateOrderItemRequest>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(request: CreateOrderRequest) -> Self {
        NewOrder {
            items: request
                .items
                .into_iter()
                .map(|item| NewOrderItem {
                    menu_item_uuid: item.menu_item_uuid.into(),
                    quantity: item.quantity,
                })
                .collect(),
            customer_name: request.customer_name,
            customer_phone: request.customer_phone,
        }
    }
}

/// Create Order Handler
///
/// Places an order for the current user.
#[endpoint(
    tags("orders"),
    summary = "Place an order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Empty order, bad quantity, or unknown menu item"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<Envelope<OrderResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let current = depot.current_user_or_401()?;

    let order = state
        .app
        .orders
        .create(current.uuid, json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(Envelope::data(order.into())))
}
