//! Order response payloads.

use kore_app::domain::orders::models::{Order, OrderItem};
use rust_decimal::prelude::ToPrimitive;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A line on an order as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    /// The menu item this line was priced from
    pub menu_item_uuid: Uuid,

    /// Dish name at placement time
    pub name: String,

    /// Unit price at placement time
    pub price: f64,

    /// Number of units ordered
    pub quantity: i32,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        OrderItemResponse {
            menu_item_uuid: item.menu_item_uuid.into(),
            name: item.name,
            price: item.price.to_f64().unwrap_or_default(),
            quantity: item.quantity,
        }
    }
}

/// An order as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub uuid: Uuid,

    /// The ordered lines
    pub items: Vec<OrderItemResponse>,

    /// Order total, server-computed
    pub total: f64,

    /// Current lifecycle status
    pub status: String,

    /// Contact name for this order
    pub customer_name: Option<String>,

    /// Contact phone for this order
    pub customer_phone: Option<String>,

    /// The date and time the order was placed
    pub created_at: String,

    /// Whether the owner may still cancel
    pub can_cancel: bool,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        let can_cancel = order.can_cancel();

        OrderResponse {
            uuid: order.uuid.into(),
            items: order.items.into_iter().map(Into::into).collect(),
            total: order.total.to_f64().unwrap_or_default(),
            status: order.status.to_string(),
            customer_name: order.customer_name,
            customer_phone: order.customer_phone,
            created_at: order.created_at.to_string(),
            can_cancel,
        }
    }
}
