//! # Cart Commands
//!
//! The tagged command type and the pure transition that applies it.
//!
//! ## Wire Shape
//! Commands serialize to the exact action objects a JavaScript view layer
//! dispatches:
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  { "type": "addItem",    "payload": { "id": 1, "name": "Laptop",    │
//! │                                       "unitPrice": 99900 } }        │
//! │  { "type": "removeItem", "payload": 1 }                             │
//! │  { "type": "clearCart" }                                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Purity
//! [`apply`] is a pure function: it consumes a state and a command and
//! returns the next state. It performs no I/O, raises no errors, and never
//! panics. The store wraps it; tests call it directly.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartState;
use crate::types::Product;

// =============================================================================
// Cart Command
// =============================================================================

/// A state-transition command for the cart.
///
/// ## Design Notes
/// The original action-object dispatch (a string `type` interpreted by a
/// switch) is expressed here as a tagged enum, so the compiler checks
/// exhaustiveness and the serde representation reproduces the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
#[ts(export)]
pub enum CartCommand {
    /// Add one unit of the product to the cart.
    AddItem(Product),

    /// Remove one unit of the product with this catalog id.
    RemoveItem(i64),

    /// Empty the cart and zero the totals.
    ClearCart,
}

// =============================================================================
// Transition Function
// =============================================================================

/// Applies a command to a cart state, producing the next state.
///
/// ## Behavior
/// Total over its domain: every command applies to every state. The worst
/// case is a silent no-op (`RemoveItem` with an id not in the cart).
///
/// ## Example
/// ```rust
/// use carton_core::{apply, CartCommand, CartState, Money, Product};
///
/// let state = CartState::new();
/// let state = apply(
///     state,
///     CartCommand::AddItem(Product::new(2, "Mouse", Money::from_cents(2500))),
/// );
/// assert_eq!(state.total_quantity, 1);
///
/// let state = apply(state, CartCommand::ClearCart);
/// assert!(state.is_empty());
/// ```
pub fn apply(mut state: CartState, command: CartCommand) -> CartState {
    match command {
        CartCommand::AddItem(product) => state.add_item(&product),
        CartCommand::RemoveItem(id) => state.remove_item(id),
        CartCommand::ClearCart => state.clear(),
    }
    state
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use serde_json::json;

    fn laptop() -> Product {
        Product::new(1, "Laptop", Money::from_cents(99900))
    }

    #[test]
    fn test_apply_sequences_match_direct_transitions() {
        let state = CartState::new();
        let state = apply(state, CartCommand::AddItem(laptop()));
        let state = apply(state, CartCommand::AddItem(laptop()));
        let state = apply(state, CartCommand::RemoveItem(1));

        assert_eq!(state.items[0].quantity, 1);
        assert_eq!(state.total_quantity, 1);
        assert_eq!(state.total_price, Money::from_cents(99900));
    }

    #[test]
    fn test_apply_remove_on_empty_is_noop() {
        let state = apply(CartState::new(), CartCommand::RemoveItem(7));
        assert_eq!(state, CartState::new());
    }

    #[test]
    fn test_add_item_wire_shape() {
        let command = CartCommand::AddItem(laptop());
        let value = serde_json::to_value(&command).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "addItem",
                "payload": { "id": 1, "name": "Laptop", "unitPrice": 99900 }
            })
        );
    }

    #[test]
    fn test_remove_item_wire_shape() {
        let command = CartCommand::RemoveItem(1);
        let value = serde_json::to_value(&command).unwrap();

        assert_eq!(value, json!({ "type": "removeItem", "payload": 1 }));
    }

    #[test]
    fn test_clear_cart_wire_shape() {
        let command = CartCommand::ClearCart;
        let value = serde_json::to_value(&command).unwrap();

        assert_eq!(value, json!({ "type": "clearCart" }));
    }

    #[test]
    fn test_action_object_decodes_to_command() {
        let action = r#"{"type":"addItem","payload":{"id":2,"name":"Mouse","unitPrice":2500}}"#;
        let command: CartCommand = serde_json::from_str(action).unwrap();

        assert_eq!(
            command,
            CartCommand::AddItem(Product::new(2, "Mouse", Money::from_cents(2500)))
        );
    }
}
