//! Value types snapshotted out of the menu catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The slice of a menu item that cart and order logic cares about.
///
/// Snapshots are taken from the catalog at a point in time; a later
/// price change in the catalog never alters an existing snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemSnapshot {
    /// Catalog identifier of the item.
    pub uuid: Uuid,

    /// Item name at snapshot time.
    pub name: String,

    /// Item price at snapshot time.
    pub price: Decimal,
}

/// A priced order line: a menu item snapshot plus a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// The snapshotted item.
    pub item: MenuItemSnapshot,

    /// Units ordered; always at least 1 in a persisted order.
    pub quantity: u32,
}

impl OrderLine {
    /// The line contribution to the order total.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.item.price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    #[test]
    fn line_subtotal_is_price_times_quantity() {
        let line = OrderLine {
            item: MenuItemSnapshot {
                uuid: Uuid::nil(),
                name: "Paneer Tikka".to_string(),
                price: dec!(4.99),
            },
            quantity: 3,
        };

        assert_eq!(line.subtotal(), dec!(14.97));
    }
}
