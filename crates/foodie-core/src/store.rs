//! # Store Plumbing
//!
//! Observer support shared by every state container.
//!
//! ## Notification Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  orchestrator                       store                               │
//! │  ────────────                       ─────                               │
//! │  subscribe(listener) ─────────────► Subscribers::subscribe              │
//! │        ◄───────────── SubscriptionId                                    │
//! │                                                                         │
//! │  cart.add_item(..) ───────────────► apply change                        │
//! │                                     │                                   │
//! │                                     ▼                                   │
//! │  listener(&CartState) ◄──────────── Subscribers::notify (synchronous)   │
//! │                                                                         │
//! │  unsubscribe(id) ─────────────────► listener dropped                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

/// Callback invoked with the new state after every change.
pub type Listener<S> = Box<dyn Fn(&S) + Send + Sync>;

/// Handle returned by `subscribe`, passed back to `unsubscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Listener registry owned by a store.
pub struct Subscribers<S> {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener<S>)>,
}

impl<S> Subscribers<S> {
    pub fn new() -> Self {
        Subscribers {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Listener<S>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Returns false if `id` was not (or is no longer) registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Calls every listener, in subscription order.
    pub fn notify(&self, state: &S) {
        for (_, listener) in &self.listeners {
            listener(state);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<S> Default for Subscribers<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for Subscribers<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.listeners.len())
            .finish()
    }
}

/// Read and subscribe access common to all stores.
///
/// Mutation goes through each store's own operations; there is no generic
/// setter.
pub trait Store {
    type State;

    fn state(&self) -> &Self::State;

    fn subscribe(&mut self, listener: Listener<Self::State>) -> SubscriptionId;

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;
}
