//! Client-style cart reducer.
//!
//! The cart is ephemeral client state: a list of menu item snapshots
//! with quantities and an incrementally maintained running total. All
//! operations are synchronous, pure reductions over the prior state;
//! nothing here touches the network or the catalog.
//!
//! Invariant: [`Cart::total`] always equals
//! [`Cart::recompute_total`]. The incremental bookkeeping exists for
//! parity with the UI reducer this models; the tests assert the two
//! never drift.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::snapshot::MenuItemSnapshot;

/// One cart line: an item snapshot and its quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    /// The snapshotted menu item.
    pub item: MenuItemSnapshot,

    /// Units in the cart; entries at quantity 0 are removed.
    pub quantity: u32,
}

impl CartEntry {
    fn subtotal(&self) -> Decimal {
        self.item.price * Decimal::from(self.quantity)
    }
}

/// An in-progress order being assembled client-side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<CartEntry>,
    total: Decimal,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// The running total.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Number of distinct items in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add one unit of `item`, inserting a new entry at quantity 1 if
    /// the item is not yet present.
    pub fn add_item(&mut self, item: &MenuItemSnapshot) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.item.uuid == item.uuid) {
            entry.quantity += 1;
        } else {
            self.entries.push(CartEntry {
                item: item.clone(),
                quantity: 1,
            });
        }

        self.total += item.price;
    }

    /// Set the quantity of the identified item. A quantity of zero or
    /// less removes the entry. Unknown ids are ignored.
    pub fn update_quantity(&mut self, item_uuid: Uuid, quantity: i64) {
        let Some(index) = self.entries.iter().position(|e| e.item.uuid == item_uuid) else {
            return;
        };

        if quantity <= 0 {
            let removed = self.entries.remove(index);

            self.total -= removed.subtotal();

            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        if let Some(entry) = self.entries.get_mut(index) {
            let delta = Decimal::from(quantity) - Decimal::from(entry.quantity);

            entry.quantity = quantity;
            self.total += entry.item.price * delta;
        }
    }

    /// Remove the identified item entirely. Unknown ids are ignored.
    pub fn remove_item(&mut self, item_uuid: Uuid) {
        self.update_quantity(item_uuid, 0);
    }

    /// Empty the cart, e.g. after a successful checkout.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.total = Decimal::ZERO;
    }

    /// Recompute the total from scratch over the current entries.
    ///
    /// Exists so callers and tests can verify the incremental total
    /// never drifts from the ground truth.
    #[must_use]
    pub fn recompute_total(&self) -> Decimal {
        self.entries.iter().map(CartEntry::subtotal).sum()
    }
}
