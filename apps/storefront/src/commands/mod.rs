//! # Commands Module
//!
//! Every intent the rendering layer can send ends up in one of these
//! functions.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (dispatch)
//! ├── cart.rs     ◄─── Cart manipulation, checkout, settle/celebration timers
//! ├── session.rs  ◄─── Login / logout
//! ├── ui.rs       ◄─── Theme and auth prompt toggles
//! └── catalog.rs  ◄─── Category selection, sorting, paging, fetch tasks
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Intent Flow                                          │
//! │                                                                         │
//! │  stdin line                                                             │
//! │  {"command":"select_category","args":{"name":"Thai"}}                   │
//! │         │                                                               │
//! │         │ serde_json → Intent::SelectCategory { name }                  │
//! │         ▼                                                               │
//! │  dispatch(&app, intent)                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  catalog::select_category(&app, "Thai")                                 │
//! │         │                                                               │
//! │         │ Result<(), ApiError>                                          │
//! │         ▼                                                               │
//! │  app.snapshot() ──► {"ok":true,"snapshot":{...}}                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;
pub mod session;
pub mod ui;

use tracing::debug;

use crate::error::ApiError;
use crate::protocol::{Intent, Outbound};
use crate::state::{AppState, Snapshot};

/// Applies one intent and returns the resulting snapshot.
///
/// Background work started here (fetches, timers) reports back through the
/// notifier, not through the return value.
pub fn dispatch(app: &AppState, intent: Intent) -> Result<Snapshot, ApiError> {
    debug!(command = intent.name(), "dispatch");

    match intent {
        Intent::GetState => {}

        Intent::AddToCart { item_id } => cart::add_to_cart(app, &item_id)?,
        Intent::RemoveFromCart { item_id } => cart::remove_from_cart(app, &item_id),
        Intent::ClearCart => cart::clear_cart(app),
        Intent::ToggleCart => cart::toggle_cart(app),
        Intent::Checkout => {
            cart::checkout(app);
        }

        Intent::Login {
            email,
            password,
            name,
            mode,
        } => {
            session::login(app, &email, &password, name.as_deref(), mode)?;
        }
        Intent::Logout => session::logout(app),

        Intent::ToggleTheme => ui::toggle_theme(app),
        Intent::ToggleAuthMode => ui::toggle_auth_mode(app),
        Intent::OpenAuthPrompt => ui::open_auth_prompt(app),
        Intent::DismissAuthPrompt => ui::dismiss_auth_prompt(app),

        Intent::SelectCategory { name } => {
            catalog::select_category(app, &name);
        }
        Intent::RefreshCatalog => {
            catalog::refresh(app);
        }
        Intent::SetSort { order } => catalog::set_sort(app, order),
        Intent::SetPage { page } => catalog::set_page(app, page),
    }

    Ok(app.snapshot())
}

/// Parses and dispatches one stdin line.
pub fn handle_line(app: &AppState, line: &str) -> Outbound {
    let result = serde_json::from_str::<Intent>(line)
        .map_err(ApiError::from)
        .and_then(|intent| dispatch(app, intent));

    Outbound::from_result(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::protocol::Response;
    use crate::notify::NoOpNotifier;
    use crate::state::StorefrontConfig;
    use crate::testing::{app_with_menu, menu, StaticCatalog};
    use foodie_core::pricing::FixedPrice;
    use foodie_core::session::CredentialSet;
    use foodie_core::Money;
    use std::sync::Arc;

    fn response(outbound: Outbound) -> Response {
        match outbound {
            Outbound::Response(r) => r,
            Outbound::Event(e) => panic!("expected response, got {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_add_to_cart_line() {
        let (app, _) = app_with_menu(menu(&["Dal"]));
        let r = response(handle_line(
            &app,
            r#"{"command":"add_to_cart","args":{"item_id":"0"}}"#,
        ));

        assert!(r.ok);
        let snapshot = r.snapshot.unwrap();
        assert_eq!(snapshot.cart.line_count, 1);
        assert!(snapshot.cart.state.is_panel_open);
    }

    #[tokio::test]
    async fn test_garbage_line_is_invalid_intent() {
        let (app, _) = app_with_menu(Vec::new());
        let r = response(handle_line(&app, "not json"));
        assert!(!r.ok);
        assert_eq!(r.error.unwrap().code, ErrorCode::InvalidIntent);
    }

    #[tokio::test]
    async fn test_failed_login_leaves_state_unchanged() {
        let (app, _) = app_with_menu(Vec::new());
        let before = app.snapshot();

        let err = dispatch(
            &app,
            Intent::Login {
                email: "test@test.com".into(),
                password: "nope123".into(),
                name: None,
                mode: None,
            },
        )
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::AuthenticationError);
        assert_eq!(app.snapshot(), before);
    }

    #[tokio::test]
    async fn test_stores_stay_independent() {
        let (app, _) = app_with_menu(menu(&["Dal"]));
        dispatch(&app, Intent::AddToCart { item_id: "0".into() }).unwrap();
        let cart_before = app.snapshot().cart;

        dispatch(&app, Intent::ToggleTheme).unwrap();
        dispatch(&app, Intent::DismissAuthPrompt).unwrap();
        dispatch(&app, Intent::Logout).unwrap();

        assert_eq!(app.snapshot().cart, cart_before);
    }

    #[tokio::test]
    async fn test_custom_accounts_and_prompt_while_signed_in() {
        let app = AppState::with_credentials(
            StorefrontConfig::default(),
            CredentialSet::empty().with("ops@shop.io", "letmein", "Ops"),
            Arc::new(StaticCatalog::default()),
            Box::new(FixedPrice(Money::from_cents(1000))),
            Arc::new(NoOpNotifier),
        );

        let login = |email: &str, password: &str| Intent::Login {
            email: email.into(),
            password: password.into(),
            name: None,
            mode: None,
        };

        let err = dispatch(&app, login("test@test.com", "test123")).unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthenticationError);

        let snapshot = dispatch(&app, login("ops@shop.io", "letmein")).unwrap();
        assert_eq!(snapshot.session.identity.unwrap().display_name, "Ops");

        let snapshot = dispatch(&app, Intent::OpenAuthPrompt).unwrap();
        assert!(snapshot.session.identity.is_some());
        assert!(!snapshot.ui.is_auth_prompt_open);
    }
}
