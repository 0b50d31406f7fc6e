//! # carton-core: Pure Cart Logic for Carton
//!
//! This crate is the **heart** of Carton. It contains the cart-state logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Carton Architecture                           │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐    │
//! │  │                 View Layer (out of repo)                    │    │
//! │  │    Catalog UI ──► Cart UI ──► Totals display                │    │
//! │  └───────────────────────────┬─────────────────────────────────┘    │
//! │                              │ dispatch / subscribe                 │
//! │  ┌───────────────────────────▼─────────────────────────────────┐    │
//! │  │                   carton-store                              │    │
//! │  │    CartStore: snapshots, dispatch queue, subscribers        │    │
//! │  └───────────────────────────┬─────────────────────────────────┘    │
//! │                              │                                      │
//! │  ┌───────────────────────────▼─────────────────────────────────┐    │
//! │  │              ★ carton-core (THIS CRATE) ★                   │    │
//! │  │                                                             │    │
//! │  │   ┌─────────┐  ┌─────────┐  ┌───────────┐  ┌───────────┐    │    │
//! │  │   │  money  │  │  types  │  │   cart    │  │  command  │    │    │
//! │  │   │  Money  │  │ Product │  │ CartState │  │  apply()  │    │    │
//! │  │   └─────────┘  └─────────┘  └───────────┘  └───────────┘    │    │
//! │  │                                                             │    │
//! │  │   NO I/O • NO RENDERING • PURE FUNCTIONS                    │    │
//! │  └─────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Catalog-facing types (Product)
//! - [`cart`] - Cart state (items, running totals) and its transitions
//! - [`command`] - Tagged command type and the pure [`apply`] transition
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every transition is deterministic - same input =
//!    same output
//! 2. **No I/O**: Network, file system, rendering access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid
//!    float errors
//! 4. **Total Transitions**: Every command applies to every state; the worst
//!    case is a silent no-op, never a panic or an error
//!
//! ## Example Usage
//!
//! ```rust
//! use carton_core::{apply, CartCommand, CartState, Money, Product};
//!
//! let laptop = Product {
//!     id: 1,
//!     name: "Laptop".to_string(),
//!     unit_price: Money::from_cents(99900), // $999.00
//! };
//!
//! let state = CartState::new();
//! let state = apply(state, CartCommand::AddItem(laptop.clone()));
//! let state = apply(state, CartCommand::AddItem(laptop));
//!
//! assert_eq!(state.items.len(), 1);
//! assert_eq!(state.total_quantity, 2);
//! assert_eq!(state.total_price, Money::from_cents(199800));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod command;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use carton_core::Money` instead of
// `use carton_core::money::Money`

pub use cart::{CartItem, CartState};
pub use command::{apply, CartCommand};
pub use money::Money;
pub use types::Product;
