//! # Cart Store
//!
//! Holds the shopping cart lines and the cart panel flag.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Intent                   Operation              State Change           │
//! │  ──────                   ─────────              ────────────           │
//! │                                                                         │
//! │  "Add to Cart" ─────────► add_item() ──────────► qty += 1 or push line  │
//! │                                                  panel = open           │
//! │                                                                         │
//! │  Click ✕ on line ───────► remove_item() ───────► lines.retain(..)       │
//! │                                                                         │
//! │  Cart icon / backdrop ──► toggle_panel() ──────► panel = !panel         │
//! │                                                                         │
//! │  "Checkout" ────────────► checkout() ──────────► capture total, clear   │
//! │                                                  → CheckoutCompleted    │
//! │                                                                         │
//! │  Settle timer fires ────► close_panel() ───────► panel = closed         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Panel State Machine
//! ```text
//!            toggle_panel / add_item
//!   ┌────────┐ ───────────────────────► ┌────────┐
//!   │ closed │                          │  open  │
//!   └────────┘ ◄─────────────────────── └────────┘
//!        ▲        toggle_panel               │
//!        │                                   │ checkout
//!        └──── close_panel (settle timer) ◄──┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;
use crate::store::{Listener, Store, Subscribers, SubscriptionId};
use crate::types::CatalogItem;

// =============================================================================
// Cart Line
// =============================================================================

/// One line in the cart.
///
/// Name, price and image are frozen at the moment the item was first added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub item_id: String,
    pub name: String,
    pub unit_price: Money,
    /// Always ≥ 1. A line never sits at zero; it is removed instead.
    pub quantity: u32,
    pub image_ref: String,
}

impl CartLine {
    fn from_item(item: &CatalogItem, unit_price: Money) -> Self {
        CartLine {
            item_id: item.id.clone(),
            name: item.display_name.clone(),
            unit_price,
            quantity: 1,
            image_ref: item.image_ref.clone(),
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// The cart as the rendering layer sees it.
///
/// ## Invariants
/// - `lines` holds at most one entry per `item_id`
/// - every line has `quantity >= 1`
/// - the total is derived on demand, never stored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    /// Lines in insertion order.
    pub lines: Vec<CartLine>,
    pub is_panel_open: bool,
}

impl CartState {
    /// Σ(unit_price × quantity).
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Number of distinct lines (the header badge).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, item_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.item_id == item_id)
    }
}

// =============================================================================
// Checkout
// =============================================================================

/// Emitted by [`CartStore::checkout`].
///
/// The orchestrator reacts to it: success notification, celebration overlay,
/// and the settle timer that closes the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutCompleted {
    /// Local reference for the simulated order.
    #[ts(as = "String")]
    pub order_id: Uuid,
    /// Total captured before the lines were cleared.
    pub total: Money,
    pub line_count: usize,
    pub total_quantity: u32,
    #[ts(as = "String")]
    pub completed_at: DateTime<Utc>,
}

// =============================================================================
// Cart Store
// =============================================================================

/// State container for the cart.
#[derive(Debug, Default)]
pub struct CartStore {
    state: CartState,
    subscribers: Subscribers<CartState>,
}

impl CartStore {
    /// Creates an empty cart with the panel closed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Adds one unit of `item` at `unit_price`.
    ///
    /// ## Behavior
    /// - Line with `item.id` exists: quantity + 1 (the original price stays)
    /// - Otherwise: append a new line with quantity 1
    /// - Either way the panel ends up open
    ///
    /// ## Precondition
    /// `unit_price >= 0`. The orchestrator checks this with
    /// [`crate::validation::validate_unit_price`] before calling.
    pub fn add_item(&mut self, item: &CatalogItem, unit_price: Money) {
        debug_assert!(!unit_price.is_negative(), "negative unit price");

        match self.state.lines.iter_mut().find(|l| l.item_id == item.id) {
            Some(line) => {
                line.quantity += 1;
                debug!(item_id = %item.id, quantity = line.quantity, "Cart line incremented");
            }
            None => {
                self.state.lines.push(CartLine::from_item(item, unit_price));
                debug!(item_id = %item.id, price = %unit_price, "Cart line added");
            }
        }

        self.state.is_panel_open = true;
        self.subscribers.notify(&self.state);
    }

    /// Removes the whole line for `item_id`.
    ///
    /// Returns false (and leaves state untouched) if there was no such line.
    pub fn remove_item(&mut self, item_id: &str) -> bool {
        let before = self.state.lines.len();
        self.state.lines.retain(|l| l.item_id != item_id);

        if self.state.lines.len() == before {
            debug!(item_id, "Remove ignored, item not in cart");
            return false;
        }

        debug!(item_id, "Cart line removed");
        self.subscribers.notify(&self.state);
        true
    }

    /// Empties the cart. The panel flag is not touched.
    pub fn clear(&mut self) {
        self.state.lines.clear();
        debug!("Cart cleared");
        self.subscribers.notify(&self.state);
    }

    pub fn toggle_panel(&mut self) {
        self.state.is_panel_open = !self.state.is_panel_open;
        debug!(open = self.state.is_panel_open, "Cart panel toggled");
        self.subscribers.notify(&self.state);
    }

    /// Closes the panel if it is open. Returns whether anything changed.
    pub fn close_panel(&mut self) -> bool {
        if !self.state.is_panel_open {
            return false;
        }

        self.state.is_panel_open = false;
        debug!("Cart panel closed");
        self.subscribers.notify(&self.state);
        true
    }

    /// Simulated checkout.
    ///
    /// The total is captured from the current lines first, then the cart is
    /// cleared. Returns `None` for an empty cart, in which case nothing
    /// changes and no listener is called.
    pub fn checkout(&mut self) -> Option<CheckoutCompleted> {
        if self.state.is_empty() {
            debug!("Checkout ignored, cart is empty");
            return None;
        }

        let completed = CheckoutCompleted {
            order_id: Uuid::new_v4(),
            total: self.state.total(),
            line_count: self.state.line_count(),
            total_quantity: self.state.total_quantity(),
            completed_at: Utc::now(),
        };

        self.state.lines.clear();
        info!(
            order_id = %completed.order_id,
            total = %completed.total,
            lines = completed.line_count,
            "Checkout completed"
        );
        self.subscribers.notify(&self.state);

        Some(completed)
    }
}

impl Store for CartStore {
    type State = CartState;

    fn state(&self) -> &CartState {
        &self.state
    }

    fn subscribe(&mut self, listener: Listener<CartState>) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    fn meal(id: &str) -> CatalogItem {
        CatalogItem::new(id, format!("Meal {}", id), format!("{}.jpg", id), "Indian")
    }

    #[test]
    fn test_new_cart_is_empty_and_closed() {
        let cart = CartStore::new();
        assert!(cart.state().is_empty());
        assert!(!cart.state().is_panel_open);
        assert!(cart.state().total().is_zero());
    }

    #[test]
    fn test_add_opens_panel() {
        let mut cart = CartStore::new();
        cart.add_item(&meal("1"), Money::from_cents(999));

        assert!(cart.state().is_panel_open);

        // Adding again keeps it open rather than flipping it
        cart.add_item(&meal("1"), Money::from_cents(999));
        assert!(cart.state().is_panel_open);
    }

    #[test]
    fn test_add_same_item_twice_increments_quantity() {
        let mut cart = CartStore::new();
        let price = Money::from_cents(1250);

        cart.add_item(&meal("1"), price);
        cart.add_item(&meal("1"), price);

        assert_eq!(cart.state().line_count(), 1);
        assert_eq!(cart.state().lines[0].quantity, 2);
        assert_eq!(cart.state().total(), price * 2_u32);
    }

    #[test]
    fn test_repeat_add_keeps_first_price() {
        let mut cart = CartStore::new();
        cart.add_item(&meal("1"), Money::from_cents(500));
        cart.add_item(&meal("1"), Money::from_cents(1800));

        assert_eq!(cart.state().lines[0].unit_price, Money::from_cents(500));
        assert_eq!(cart.state().total(), Money::from_cents(1000));
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = CartStore::new();
        for id in ["3", "1", "2", "1"] {
            cart.add_item(&meal(id), Money::from_cents(100));
        }

        let ids: Vec<_> = cart.state().lines.iter().map(|l| l.item_id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = CartStore::new();
        cart.add_item(&meal("1"), Money::from_cents(100));
        cart.add_item(&meal("2"), Money::from_cents(200));

        assert!(cart.remove_item("1"));
        let after_first = cart.state().clone();

        assert!(!cart.remove_item("1"));
        assert_eq!(cart.state(), &after_first);
    }

    #[test]
    fn test_remove_deletes_whole_line() {
        let mut cart = CartStore::new();
        cart.add_item(&meal("1"), Money::from_cents(100));
        cart.add_item(&meal("1"), Money::from_cents(100));
        cart.add_item(&meal("1"), Money::from_cents(100));

        cart.remove_item("1");
        assert!(cart.state().line("1").is_none());
    }

    #[test]
    fn test_clear_keeps_panel_flag() {
        let mut cart = CartStore::new();
        cart.add_item(&meal("1"), Money::from_cents(100));
        assert!(cart.state().is_panel_open);

        cart.clear();
        assert!(cart.state().is_empty());
        assert!(cart.state().is_panel_open);
    }

    #[test]
    fn test_toggle_panel_twice_restores() {
        let mut cart = CartStore::new();
        let original = cart.state().is_panel_open;
        cart.toggle_panel();
        assert_ne!(cart.state().is_panel_open, original);
        cart.toggle_panel();
        assert_eq!(cart.state().is_panel_open, original);
    }

    #[test]
    fn test_close_panel_only_changes_open_panel() {
        let mut cart = CartStore::new();
        assert!(!cart.close_panel());

        cart.toggle_panel();
        assert!(cart.close_panel());
        assert!(!cart.state().is_panel_open);
    }

    #[test]
    fn test_checkout_captures_total_before_clearing() {
        let mut cart = CartStore::new();
        cart.add_item(&meal("a"), Money::from_cents(1000));
        cart.add_item(&meal("a"), Money::from_cents(1000));
        cart.add_item(&meal("b"), Money::from_cents(500));

        let done = cart.checkout().expect("non-empty cart checks out");

        assert_eq!(done.total, Money::from_cents(2500));
        assert_eq!(done.total.to_string(), "$25.00");
        assert_eq!(done.line_count, 2);
        assert_eq!(done.total_quantity, 3);
        assert!(cart.state().lines.is_empty());
        // Panel closes later, via the settle timer
        assert!(cart.state().is_panel_open);
    }

    #[test]
    fn test_checkout_on_empty_cart_is_noop() {
        let mut cart = CartStore::new();
        let calls = Arc::new(Mutex::new(0));
        let counter = calls.clone();
        cart.subscribe(Box::new(move |_: &CartState| *counter.lock().unwrap() += 1));

        assert!(cart.checkout().is_none());
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_subscribers_see_state_after_change() {
        let mut cart = CartStore::new();
        let seen: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let id = cart.subscribe(Box::new(move |s: &CartState| {
            sink.lock().unwrap().push(s.line_count());
        }));

        cart.add_item(&meal("1"), Money::from_cents(100));
        cart.add_item(&meal("2"), Money::from_cents(100));
        cart.remove_item("missing");
        cart.remove_item("1");

        assert_eq!(*seen.lock().unwrap(), vec![1, 2, 1]);

        assert!(cart.unsubscribe(id));
        cart.clear();
        assert_eq!(seen.lock().unwrap().len(), 3);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u8, u16),
        Remove(u8),
        Clear,
        Toggle,
        Checkout,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..6, 0u16..2500).prop_map(|(id, cents)| Op::Add(id, cents)),
            (0u8..6).prop_map(Op::Remove),
            Just(Op::Clear),
            Just(Op::Toggle),
            Just(Op::Checkout),
        ]
    }

    proptest! {
        #[test]
        fn prop_cart_invariants_hold(ops in proptest::collection::vec(op(), 0..64)) {
            let mut cart = CartStore::new();

            for op in ops {
                match op {
                    Op::Add(id, cents) => {
                        cart.add_item(&meal(&id.to_string()), Money::from_cents(cents as i64));
                    }
                    Op::Remove(id) => {
                        cart.remove_item(&id.to_string());
                    }
                    Op::Clear => cart.clear(),
                    Op::Toggle => cart.toggle_panel(),
                    Op::Checkout => {
                        let expected = cart.state().total();
                        if let Some(done) = cart.checkout() {
                            prop_assert_eq!(done.total, expected);
                        }
                        prop_assert!(cart.state().is_empty());
                    }
                }

                let mut ids = HashSet::new();
                for line in &cart.state().lines {
                    prop_assert!(ids.insert(line.item_id.clone()), "duplicate line");
                    prop_assert!(line.quantity >= 1);
                }
                let recomputed: i64 = cart
                    .state()
                    .lines
                    .iter()
                    .map(|l| l.unit_price.cents() * l.quantity as i64)
                    .sum();
                prop_assert_eq!(cart.state().total().cents(), recomputed);
            }
        }
    }
}
