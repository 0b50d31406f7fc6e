//! # Cart State
//!
//! The cart record and its three transitions.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                            │
//! │                                                                     │
//! │  View Action              Command                State Change       │
//! │  ───────────              ───────                ────────────       │
//! │                                                                     │
//! │  Click "Add" ───────────► AddItem(product) ────► qty/totals up      │
//! │                                                                     │
//! │  Click "Remove" ────────► RemoveItem(id) ──────► one unit off       │
//! │                                                                     │
//! │  Click "Clear" ─────────► ClearCart ───────────► empty record       │
//! │                                                                     │
//! │  NOTE: Every transition is total. The worst case is a silent        │
//! │        no-op (removing an id that is not in the cart).              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Running Totals
//! `total_quantity` and `total_price` are maintained as counters updated on
//! every transition. They are NOT derived from the items on read. Each
//! add/remove moves the counters by exactly one unit's worth, which keeps
//! them in lockstep with the per-line `line_total` adjustments.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the cart.
///
/// ## Design Notes
/// - `unit_price` is a frozen copy of the product price at the time of the
///   first add. The cart never re-reads the catalog, so every later
///   quantity change for this id uses this frozen price.
/// - `line_total` is adjusted by one unit's price per transition rather than
///   recomputed as `unit_price × quantity`. The two agree only while every
///   transition changes `quantity` by exactly 1; a bulk-quantity operation
///   would have to recompute instead of adjust.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Catalog id of the product on this line.
    pub id: i64,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Price in cents for a single unit at time of adding (frozen).
    pub unit_price: Money,

    /// Units of this product in the cart. Always >= 1; a line at quantity 1
    /// is deleted outright by the next remove.
    pub quantity: i64,

    /// Running total for this line, in cents.
    pub line_total: Money,
}

impl CartItem {
    /// Creates a single-unit line from a catalog product.
    fn from_product(product: &Product) -> Self {
        CartItem {
            id: product.id,
            name: product.name.clone(),
            unit_price: product.unit_price,
            quantity: 1,
            line_total: product.unit_price,
        }
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// The full cart record: lines plus running totals.
///
/// ## Invariants
/// - Lines are unique by `id` (adding the same product increments quantity)
/// - Lines appear in insertion order and keep their position across quantity
///   changes
/// - `total_quantity` equals adds minus removes applied so far
/// - `total_price` equals the sum of unit-price contributions applied by
///   those same transitions
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartState {
    /// Lines in the cart, in insertion order.
    pub items: Vec<CartItem>,

    /// Total units across all lines.
    pub total_quantity: i64,

    /// Total price across all lines, in cents.
    pub total_price: Money,
}

impl CartState {
    /// Creates a new empty cart: no lines, zero totals.
    pub fn new() -> Self {
        CartState {
            items: Vec::new(),
            total_quantity: 0,
            total_price: Money::zero(),
        }
    }

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - If the product is already in the cart: its quantity goes up by 1
    ///   and its line total goes up by one unit's price
    /// - If it is not: a new single-unit line is appended
    /// - Either way the cart totals go up by 1 unit / one unit's price
    ///
    /// No validation is performed; the product is trusted as supplied.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == product.id) {
            item.quantity += 1;
            item.line_total += product.unit_price;
        } else {
            self.items.push(CartItem::from_product(product));
        }

        self.total_quantity += 1;
        self.total_price += product.unit_price;
    }

    /// Removes one unit of the product with the given id.
    ///
    /// ## Behavior
    /// - Id not in cart: silent no-op, state is untouched
    /// - Quantity 1: the line is deleted from the cart entirely
    /// - Quantity > 1: quantity and line total go down by one unit
    ///
    /// Removing all N units of a line takes N calls.
    pub fn remove_item(&mut self, id: i64) {
        let Some(index) = self.items.iter().position(|i| i.id == id) else {
            return;
        };

        // The frozen per-unit price, not a re-derivation from line_total.
        let unit_price = self.items[index].unit_price;

        self.total_quantity -= 1;
        self.total_price -= unit_price;

        if self.items[index].quantity == 1 {
            self.items.remove(index);
        } else {
            let item = &mut self.items[index];
            item.quantity -= 1;
            item.line_total -= unit_price;
        }
    }

    /// Empties the cart: no lines, zero totals. Idempotent.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total_quantity = 0;
        self.total_price = Money::zero();
    }

    /// Returns the number of distinct lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
