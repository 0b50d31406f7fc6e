//! # Cart Store
//!
//! The single shared cart state, its dispatch path, and its subscribers.
//!
//! ## Thread Safety
//! The state is wrapped in `Mutex<CartState>` because:
//! 1. Multiple host threads may dispatch or read concurrently
//! 2. Only one transition may run at a time (single writer)
//! 3. A transition must commit before any observer sees the state again
//!
//! ## Dispatch Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Dispatch Cycle                                 │
//! │                                                                     │
//! │  dispatch(command)                                                  │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  lock state ──► apply(state, command) ──► commit ──► unlock         │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  notify each subscriber with the committed snapshot                 │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  return the snapshot to the caller                                  │
//! │                                                                     │
//! │  NOTE: The state lock is released before listeners run, so a        │
//! │        listener may freely call get_state(). Listeners must not     │
//! │        dispatch or (un)subscribe from inside the callback; the      │
//! │        cycle is synchronous and the subscriber lock is held.        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::mem;
use std::sync::Mutex;

use tracing::debug;

use carton_core::{apply, CartCommand, CartState};

use crate::error::StoreResult;

/// A listener invoked with the committed snapshot after every dispatch.
type Listener = Box<dyn Fn(&CartState) + Send>;

// =============================================================================
// Subscription Id
// =============================================================================

/// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// The subscriber registry. Ids are never reused within a store's lifetime.
struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Subscribers {
    fn new() -> Self {
        Subscribers {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

// =============================================================================
// Cart Store
// =============================================================================

/// The cart state store.
///
/// ## Design Notes
/// - Explicitly constructed and passed to whatever owns the view layer;
///   there is no module-level global
/// - `Mutex` (not `RwLock`): cart operations are quick and most of them
///   write, so reader/writer separation buys nothing
/// - Every read is a committed snapshot; an in-progress transition is never
///   observable
pub struct CartStore {
    state: Mutex<CartState>,
    subscribers: Mutex<Subscribers>,
}

impl CartStore {
    /// Creates a store holding an empty cart: no lines, zero totals.
    pub fn new() -> Self {
        CartStore {
            state: Mutex::new(CartState::new()),
            subscribers: Mutex::new(Subscribers::new()),
        }
    }

    /// Returns a snapshot of the current committed state.
    ///
    /// The snapshot is a value copy: later dispatches do not affect it.
    pub fn get_state(&self) -> CartState {
        self.state.lock().expect("cart state mutex poisoned").clone()
    }

    /// Executes a function with read access to the committed state.
    ///
    /// ## Usage
    /// ```rust
    /// use carton_store::CartStore;
    ///
    /// let store = CartStore::new();
    /// let quantity = store.with_state(|s| s.total_quantity);
    /// assert_eq!(quantity, 0);
    /// ```
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartState) -> R,
    {
        let state = self.state.lock().expect("cart state mutex poisoned");
        f(&state)
    }

    /// Applies a command to the cart, commits the result, and notifies every
    /// subscriber with the committed snapshot.
    ///
    /// ## Behavior
    /// - Transitions run to completion one at a time, in call order
    /// - The returned snapshot is exactly what subscribers were handed
    /// - Commands never fail; the worst case is a silent no-op
    pub fn dispatch(&self, command: CartCommand) -> CartState {
        debug!(?command, "dispatch");

        let snapshot = {
            let mut state = self.state.lock().expect("cart state mutex poisoned");
            let current = mem::take(&mut *state);
            *state = apply(current, command);
            state.clone()
        };
        // Lock released: listeners may call get_state() freely.

        self.notify(&snapshot);
        snapshot
    }

    /// Decodes a view-layer action object and dispatches it.
    ///
    /// ## Accepted Shapes
    /// ```json
    /// { "type": "addItem",    "payload": { "id": 1, "name": "Laptop", "unitPrice": 99900 } }
    /// { "type": "removeItem", "payload": 1 }
    /// { "type": "clearCart" }
    /// ```
    ///
    /// ## Errors
    /// [`StoreError::InvalidCommand`](crate::StoreError::InvalidCommand) if
    /// the JSON does not decode to a known command. The state is untouched
    /// in that case.
    pub fn dispatch_json(&self, action: &str) -> StoreResult<CartState> {
        let command: CartCommand = serde_json::from_str(action)?;
        Ok(self.dispatch(command))
    }

    /// Registers a listener that receives the committed snapshot after every
    /// dispatch, and returns the handle that cancels it.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&CartState) + Send + 'static,
    {
        let mut subscribers = self.subscribers.lock().expect("subscriber mutex poisoned");
        let id = SubscriptionId(subscribers.next_id);
        subscribers.next_id += 1;
        subscribers.entries.push((id, Box::new(listener)));
        debug!(id = id.0, "subscribe");
        id
    }

    /// Removes a listener. Unknown or already-removed ids are a silent no-op.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut subscribers = self.subscribers.lock().expect("subscriber mutex poisoned");
        subscribers.entries.retain(|(entry_id, _)| *entry_id != id);
        debug!(id = id.0, "unsubscribe");
    }

    /// Invokes every registered listener with the committed snapshot.
    fn notify(&self, snapshot: &CartState) {
        let subscribers = self.subscribers.lock().expect("subscriber mutex poisoned");
        for (_, listener) in &subscribers.entries {
            listener(snapshot);
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use carton_core::{Money, Product};

    fn laptop() -> Product {
        Product::new(1, "Laptop", Money::from_cents(99900))
    }

    fn mouse() -> Product {
        Product::new(2, "Mouse", Money::from_cents(2500))
    }

    #[test]
    fn test_new_store_starts_empty() {
        let store = CartStore::new();
        let state = store.get_state();
        assert!(state.is_empty());
        assert_eq!(state.total_quantity, 0);
        assert_eq!(state.total_price, Money::zero());
    }

    #[test]
    fn test_dispatch_returns_committed_snapshot() {
        let store = CartStore::new();

        let snapshot = store.dispatch(CartCommand::AddItem(laptop()));

        assert_eq!(snapshot.total_quantity, 1);
        assert_eq!(store.get_state(), snapshot);
    }

    #[test]
    fn test_snapshot_is_a_value_copy() {
        let store = CartStore::new();
        store.dispatch(CartCommand::AddItem(laptop()));

        let before = store.get_state();
        store.dispatch(CartCommand::AddItem(mouse()));

        // The earlier snapshot is unaffected by the later dispatch
        assert_eq!(before.item_count(), 1);
        assert_eq!(store.get_state().item_count(), 2);
    }

    #[test]
    fn test_subscriber_receives_each_committed_snapshot() {
        let store = CartStore::new();
        let seen: Arc<Mutex<Vec<CartState>>> = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        store.subscribe(move |state| sink.lock().unwrap().push(state.clone()));

        store.dispatch(CartCommand::AddItem(laptop()));
        store.dispatch(CartCommand::AddItem(laptop()));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].total_quantity, 1);
        assert_eq!(seen[1].total_quantity, 2);
        assert_eq!(seen[1].items[0].line_total, Money::from_cents(199800));
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let store = CartStore::new();
        let seen: Arc<Mutex<Vec<CartState>>> = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let id = store.subscribe(move |state| sink.lock().unwrap().push(state.clone()));

        store.dispatch(CartCommand::AddItem(laptop()));
        store.unsubscribe(id);
        store.dispatch(CartCommand::AddItem(mouse()));

        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_unsubscribe_unknown_id_is_noop() {
        let store = CartStore::new();
        let id = store.subscribe(|_| {});
        store.unsubscribe(id);
        // Second unsubscribe of the same id must be silent
        store.unsubscribe(id);
    }

    #[test]
    fn test_multiple_subscribers_all_notified() {
        let store = CartStore::new();
        let first: Arc<Mutex<Vec<i64>>> = Arc::new(Mutex::new(Vec::new()));
        let second: Arc<Mutex<Vec<i64>>> = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&first);
        store.subscribe(move |state| sink.lock().unwrap().push(state.total_quantity));
        let sink = Arc::clone(&second);
        store.subscribe(move |state| sink.lock().unwrap().push(state.total_quantity));

        store.dispatch(CartCommand::AddItem(mouse()));

        assert_eq!(*first.lock().unwrap(), vec![1]);
        assert_eq!(*second.lock().unwrap(), vec![1]);
    }

    #[test]
    fn test_dispatch_json_accepts_action_objects() {
        let store = CartStore::new();

        store
            .dispatch_json(
                r#"{"type":"addItem","payload":{"id":1,"name":"Laptop","unitPrice":99900}}"#,
            )
            .unwrap();
        store
            .dispatch_json(
                r#"{"type":"addItem","payload":{"id":2,"name":"Mouse","unitPrice":2500}}"#,
            )
            .unwrap();
        let state = store
            .dispatch_json(r#"{"type":"removeItem","payload":1}"#)
            .unwrap();

        assert_eq!(state.item_count(), 1);
        assert_eq!(state.items[0].name, "Mouse");
        assert_eq!(state.total_quantity, 1);
        assert_eq!(state.total_price, Money::from_cents(2500));

        let state = store.dispatch_json(r#"{"type":"clearCart"}"#).unwrap();
        assert!(state.is_empty());
    }

    #[test]
    fn test_dispatch_json_rejects_unknown_action() {
        let store = CartStore::new();
        store.dispatch(CartCommand::AddItem(laptop()));
        let before = store.get_state();

        let result = store.dispatch_json(r#"{"type":"checkout"}"#);

        assert!(result.is_err());
        // A rejected action leaves the state untouched
        assert_eq!(store.get_state(), before);
    }

    #[test]
    fn test_remove_absent_id_leaves_state_unchanged() {
        let store = CartStore::new();
        store.dispatch(CartCommand::AddItem(laptop()));
        let before = store.get_state();

        let after = store.dispatch(CartCommand::RemoveItem(99));

        assert_eq!(after, before);
    }
}
