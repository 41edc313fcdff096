//! # Cart Store
//!
//! The locally-held list of items the user intends to order, independent of
//! any specific order submission. Keyed by menu id: at most one entry per
//! menu, quantities merged on repeated adds.
//!
//! Every mutation persists the whole list. A failed write is logged and the
//! in-memory mutation stands. The cart is a best-effort local cache and
//! availability wins over durability here.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::OrderItem;

use crate::storage::{keys, Storage};

/// Storage-backed cart store; share via `Arc`.
pub struct CartStore {
    storage: Arc<dyn Storage>,
    items: RwLock<Vec<OrderItem>>,
}

impl CartStore {
    /// Create an empty cart. Call [`hydrate`](Self::hydrate) to restore a
    /// persisted one.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            items: RwLock::new(Vec::new()),
        }
    }

    /// Restore the cart from persistence. An unreadable record starts empty.
    pub fn hydrate(&self) {
        let items = match self.storage.get(keys::CART) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(items) => items,
                Err(err) => {
                    tracing::warn!(error = %err, "persisted cart is unreadable, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read persisted cart");
                Vec::new()
            }
        };

        *self.items.write() = items;
    }

    /// Add one unit of `menu_id`: increments the existing line or appends a
    /// new one with quantity 1.
    pub fn add_or_increment(&self, menu_id: i64) {
        let mut items = self.items.write();
        match items.iter_mut().find(|item| item.menu_id == menu_id) {
            Some(item) => item.qty += 1,
            None => items.push(OrderItem { menu_id, qty: 1 }),
        }
        self.persist(&items);
    }

    /// Set the quantity of an existing line, floored at 1.
    ///
    /// No-op when `menu_id` is not in the cart: a quantity cannot be set for
    /// an item that was never added. Items leave the cart only through
    /// [`remove`](Self::remove) or [`clear`](Self::clear), so zero-quantity
    /// lines never exist.
    pub fn set_quantity(&self, menu_id: i64, qty: i64) {
        let mut items = self.items.write();
        if let Some(item) = items.iter_mut().find(|item| item.menu_id == menu_id) {
            item.qty = qty.max(1);
            self.persist(&items);
        }
    }

    /// Drop the line with `menu_id`; no-op if absent.
    pub fn remove(&self, menu_id: i64) {
        let mut items = self.items.write();
        items.retain(|item| item.menu_id != menu_id);
        self.persist(&items);
    }

    /// Empty the cart. Invoked after a successful order submission and on
    /// logout.
    pub fn clear(&self) {
        let mut items = self.items.write();
        items.clear();
        self.persist(&items);
    }

    /// Snapshot of the current line items, in insertion order.
    pub fn items(&self) -> Vec<OrderItem> {
        self.items.read().clone()
    }

    /// Quantity for `menu_id`, 0 when absent.
    pub fn quantity(&self, menu_id: i64) -> i64 {
        self.items
            .read()
            .iter()
            .find(|item| item.menu_id == menu_id)
            .map_or(0, |item| item.qty)
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    fn persist(&self, items: &[OrderItem]) {
        let json = match serde_json::to_string(items) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize cart");
                return;
            }
        };
        if let Err(err) = self.storage.set(keys::CART, &json) {
            tracing::warn!(error = %err, "failed to persist cart");
        }
    }
}
