//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│ Settled  │       │
//! │  │  Cart    │     │ (panel   │     │ overlay  │     │ (panel   │       │
//! │  │          │     │  open)   │     │ + toast  │     │  closed) │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart       settle timer                       │
//! │                   remove_from_cart  celebration timer                  │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use foodie_core::cart::{CartStore, CheckoutCompleted};
use foodie_core::timer::TimerToken;
use foodie_core::ui::UiStore;
use foodie_core::validation::validate_unit_price;

use crate::error::ApiError;
use crate::notify::{Notification, CHECKOUT_MESSAGE};
use crate::state::AppState;

/// Adds one unit of a menu item.
///
/// ## Behavior
/// - Item must be in the currently loaded menu
/// - A new line gets a price from the price source; repeat adds keep it
/// - The panel opens and any pending settle timer is dropped
pub fn add_to_cart(app: &AppState, item_id: &str) -> Result<(), ApiError> {
    let item = app
        .catalog
        .with_store(|c| c.state().find_item(item_id).cloned())
        .ok_or_else(|| ApiError::not_found("Menu item", item_id))?;

    let existing = app
        .cart
        .with_store(|c| c.state().line(item_id).map(|l| l.unit_price));
    let price = match existing {
        Some(price) => price,
        None => app.prices.with_store_mut(|p| p.price_for(&item)),
    };
    validate_unit_price(price)?;

    app.cart.with_store_mut(|c| c.add_item(&item, price));
    app.timers.with_store_mut(|t| t.settle.cancel());

    Ok(())
}

/// Removes the whole line. Unknown ids are ignored.
pub fn remove_from_cart(app: &AppState, item_id: &str) {
    if !app.cart.with_store_mut(|c| c.remove_item(item_id)) {
        debug!(item_id, "remove_from_cart: no such line");
    }
}

pub fn clear_cart(app: &AppState) {
    app.cart.with_store_mut(CartStore::clear);
}

/// Flips the panel. A pending settle timer is dropped so it cannot close a
/// panel the user just reopened.
pub fn toggle_cart(app: &AppState) {
    app.cart.with_store_mut(CartStore::toggle_panel);
    app.timers.with_store_mut(|t| t.settle.cancel());
}

/// Simulated checkout.
///
/// ## Sequence
/// ```text
/// CartStore::checkout ──► None (empty cart) ──► nothing happens
///        │
///        ▼ Some(receipt)
/// success toast ──► celebration on ──► arm settle + celebration timers
///        │
///        ├── after celebration_ms: celebration off
///        └── after settle_delay_ms: cart panel closes
/// ```
pub fn checkout(app: &AppState) -> Option<CheckoutCompleted> {
    let receipt = app.cart.with_store_mut(CartStore::checkout)?;

    app.notifier.notify(&Notification::success(CHECKOUT_MESSAGE));
    app.ui.with_store_mut(UiStore::start_celebration);

    let (settle, celebration) = app
        .timers
        .with_store_mut(|t| (t.settle.arm(), t.celebration.arm()));

    let settings = &app.config.storefront;
    spawn_settle_timer(app.clone(), settle, settings.settle_delay());
    spawn_celebration_timer(app.clone(), celebration, settings.celebration());

    Some(receipt)
}

fn spawn_settle_timer(app: AppState, token: TimerToken, delay: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        if !app.timers.with_store_mut(|t| t.settle.fire(token)) {
            debug!("Settle timer superseded");
            return;
        }

        if app.cart.with_store_mut(CartStore::close_panel) {
            app.publish_change();
        }
    })
}

fn spawn_celebration_timer(app: AppState, token: TimerToken, delay: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        if !app.timers.with_store_mut(|t| t.celebration.fire(token)) {
            debug!("Celebration timer superseded");
            return;
        }

        app.ui.with_store_mut(UiStore::end_celebration);
        app.publish_change();
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{app_with_menu, menu};
    use foodie_core::Money;

    fn panel_open(app: &AppState) -> bool {
        app.cart.with_store(|c| c.state().is_panel_open)
    }

    fn celebrating(app: &AppState) -> bool {
        app.ui.with_store(|u| u.state().is_celebrating)
    }

    #[tokio::test]
    async fn test_add_unknown_item_is_not_found() {
        let (app, _) = app_with_menu(menu(&["Dal"]));
        let err = add_to_cart(&app, "missing").unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::NotFound);
        assert!(app.cart.with_store(|c| c.state().is_empty()));
    }

    #[tokio::test]
    async fn test_add_twice_keeps_one_line_and_price() {
        let (app, _) = app_with_menu(menu(&["Dal", "Naan"]));
        add_to_cart(&app, "0").unwrap();
        add_to_cart(&app, "0").unwrap();

        let state = app.cart.with_store(|c| c.state().clone());
        assert_eq!(state.line_count(), 1);
        assert_eq!(state.lines[0].quantity, 2);
        assert_eq!(state.total(), Money::from_cents(2000));
        assert!(state.is_panel_open);
    }

    #[tokio::test]
    async fn test_empty_checkout_does_nothing() {
        let (app, notes) = app_with_menu(menu(&["Dal"]));
        assert!(checkout(&app).is_none());
        assert!(notes.messages().is_empty());
        assert!(!celebrating(&app));
    }

    #[tokio::test(start_paused = true)]
    async fn test_checkout_runs_both_timers() {
        let (app, notes) = app_with_menu(menu(&["Dal", "Naan"]));
        add_to_cart(&app, "0").unwrap();
        add_to_cart(&app, "0").unwrap();
        add_to_cart(&app, "1").unwrap();

        let receipt = checkout(&app).unwrap();
        assert_eq!(receipt.total, Money::from_cents(3000));
        assert_eq!(notes.last().unwrap().message, CHECKOUT_MESSAGE);
        assert!(celebrating(&app));
        assert!(panel_open(&app));
        assert!(app.cart.with_store(|c| c.state().is_empty()));

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert!(panel_open(&app));

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(!panel_open(&app));
        assert!(!celebrating(&app));
        assert_eq!(notes.change_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_cancels_pending_settle() {
        let (app, _) = app_with_menu(menu(&["Dal"]));
        add_to_cart(&app, "0").unwrap();
        checkout(&app).unwrap();

        tokio::time::sleep(Duration::from_millis(1000)).await;
        toggle_cart(&app);
        toggle_cart(&app);
        assert!(panel_open(&app));

        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert!(panel_open(&app), "cancelled settle timer closed the panel");
        assert!(!celebrating(&app));
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_checkout_supersedes_first_timers() {
        let (app, _) = app_with_menu(menu(&["Dal"]));
        add_to_cart(&app, "0").unwrap();
        checkout(&app).unwrap();

        tokio::time::sleep(Duration::from_millis(2000)).await;
        add_to_cart(&app, "0").unwrap();
        checkout(&app).unwrap();

        // First timers would have fired at 3000
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(panel_open(&app));
        assert!(celebrating(&app));

        tokio::time::sleep(Duration::from_millis(1600)).await;
        assert!(!panel_open(&app));
        assert!(!celebrating(&app));
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let (app, _) = app_with_menu(menu(&["Dal", "Naan"]));
        add_to_cart(&app, "0").unwrap();
        add_to_cart(&app, "1").unwrap();

        remove_from_cart(&app, "0");
        remove_from_cart(&app, "0");
        assert_eq!(app.cart.with_store(|c| c.state().line_count()), 1);

        clear_cart(&app);
        assert!(app.cart.with_store(|c| c.state().is_empty()));
    }
}
