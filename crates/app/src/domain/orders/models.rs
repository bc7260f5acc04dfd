//! Order data models.

use jiff::Timestamp;
use kore::OrderStatus;
use rust_decimal::Decimal;

use crate::{auth::UserUuid, domain::menu::models::MenuItemUuid, uuids::TypedUuid};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// A line on a placed order, snapshotted from the menu at placement
/// time so later menu edits never change what was sold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub menu_item_uuid: MenuItemUuid,
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub uuid: OrderUuid,
    pub user_uuid: UserUuid,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub created_at: Timestamp,
}

impl Order {
    /// Whether the owner may still cancel this order.
    #[must_use]
    pub fn can_cancel(&self) -> bool {
        self.status.can_cancel()
    }
}

/// A requested order line; prices are resolved server-side.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub menu_item_uuid: MenuItemUuid,
    pub quantity: i32,
}

/// Order placement payload.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub items: Vec<NewOrderItem>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
}
