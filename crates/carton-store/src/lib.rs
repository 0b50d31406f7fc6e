//! # carton-store: The Cart State Store
//!
//! The shared-state container that sits between the view layer and the pure
//! cart logic in `carton-core`.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                                                                     │
//! │  View Layer ──► dispatch(command) ──► apply (pure) ──► commit       │
//! │       ▲                                                  │          │
//! │       │                                                  ▼          │
//! │       └──────────── listener(snapshot) ◄──── notify subscribers     │
//! │                                                                     │
//! │  Subscribers only ever see committed snapshots; a transition is     │
//! │  never observable while in progress.                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`] - [`CartStore`]: dispatch, snapshots, subscriptions
//! - [`error`] - [`StoreError`]: the action-decoding boundary error
//! - [`catalog`] - the fixed demo catalog a host wires into its view layer
//!
//! ## Example Usage
//!
//! ```rust
//! use carton_core::{CartCommand, Money, Product};
//! use carton_store::CartStore;
//!
//! let store = CartStore::new();
//! let mouse = Product::new(2, "Mouse", Money::from_cents(2500));
//!
//! let snapshot = store.dispatch(CartCommand::AddItem(mouse));
//! assert_eq!(snapshot.total_quantity, 1);
//! assert_eq!(store.get_state(), snapshot);
//! ```

pub mod catalog;
pub mod error;
pub mod store;

pub use catalog::demo_catalog;
pub use error::StoreError;
pub use store::{CartStore, SubscriptionId};
