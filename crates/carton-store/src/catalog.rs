//! # Demo Catalog
//!
//! The fixed product catalog the demo view layer offers.
//!
//! The catalog is presentation-owned data: the store never reads it, and
//! nothing here is persisted. It ships with the store crate so hosts and
//! tests have realistic products to dispatch without inventing their own.

use carton_core::{Money, Product};

/// Returns the fixed four-product demo catalog.
///
/// ## Example
/// ```rust
/// use carton_store::{demo_catalog, CartStore};
/// use carton_core::CartCommand;
///
/// let store = CartStore::new();
/// let catalog = demo_catalog();
///
/// let state = store.dispatch(CartCommand::AddItem(catalog[0].clone()));
/// assert_eq!(state.items[0].name, "Laptop");
/// ```
pub fn demo_catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Laptop", Money::from_major_minor(999, 0)),
        Product::new(2, "Mouse", Money::from_major_minor(25, 0)),
        Product::new(3, "Keyboard", Money::from_major_minor(75, 0)),
        Product::new(4, "Monitor", Money::from_major_minor(299, 0)),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_distinct() {
        let catalog = demo_catalog();
        let mut ids: Vec<i64> = catalog.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_catalog_prices() {
        let catalog = demo_catalog();
        assert_eq!(catalog[0].unit_price, Money::from_cents(99900));
        assert_eq!(catalog[3].unit_price, Money::from_cents(29900));
    }
}
