//! # Catalog Types
//!
//! Types supplied by the view layer when it talks to the cart.
//!
//! ## Who Owns What
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  View layer owns:   the product catalog (Product values)            │
//! │  Store owns:        CartState (items + running totals)              │
//! │                                                                     │
//! │  A Product crosses the boundary exactly once: inside an             │
//! │  addItem action. The cart never looks the product up again.         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A catalog entry the view layer can add to the cart.
///
/// ## Design Notes
/// - `id` is a plain integer: the catalog is static presentation data, so
///   there is no need for UUIDs or a dual-key identity scheme
/// - No validation is performed on construction; the cart accepts whatever
///   the catalog supplies (negative prices included) and never rejects input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Catalog identifier. Also the lookup key inside the cart.
    pub id: i64,

    /// Display name shown in the catalog and on the cart line.
    pub name: String,

    /// Price for a single unit, in cents.
    pub unit_price: Money,
}

impl Product {
    /// Creates a new catalog entry.
    ///
    /// ## Example
    /// ```rust
    /// use carton_core::{Money, Product};
    ///
    /// let mouse = Product::new(2, "Mouse", Money::from_cents(2500));
    /// assert_eq!(mouse.unit_price.cents(), 2500);
    /// ```
    pub fn new(id: i64, name: impl Into<String>, unit_price: Money) -> Self {
        Product {
            id,
            name: name.into(),
            unit_price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
