//! # Session Commands
//!
//! ```text
//! login ──► SessionStore::login
//!             │
//!             ├── Ok  ──► dismiss auth prompt ──► "Welcome back, {name}!"
//!             │                                   "Welcome to FoodieHub, {name}!"
//!             │
//!             └── Err ──► error toast with the store's message ──► ApiError
//! ```

use foodie_core::ui::UiStore;
use foodie_core::{AuthMode, Identity};

use crate::error::ApiError;
use crate::notify::Notification;
use crate::state::AppState;

/// Signs in or signs up.
///
/// `mode` defaults to the auth form's current mode.
pub fn login(
    app: &AppState,
    email: &str,
    password: &str,
    name: Option<&str>,
    mode: Option<AuthMode>,
) -> Result<Identity, ApiError> {
    let mode = mode.unwrap_or_else(|| app.ui.with_store(|u| u.state().auth_mode));

    let result = app
        .session
        .with_store_mut(|s| s.login(email, password, mode, name.unwrap_or("")));

    match result {
        Ok(identity) => {
            app.ui.with_store_mut(UiStore::dismiss_auth_prompt);
            app.notifier
                .notify(&Notification::success(welcome_message(mode, &identity)));
            Ok(identity)
        }
        Err(e) => {
            app.notifier.notify(&Notification::error(e.to_string()));
            Err(e.into())
        }
    }
}

/// Ends the session and brings the auth prompt back.
pub fn logout(app: &AppState) {
    app.session.with_store_mut(|s| s.logout());
    app.ui.with_store_mut(UiStore::open_auth_prompt);
}

fn welcome_message(mode: AuthMode, identity: &Identity) -> String {
    match mode {
        AuthMode::SignIn => format!("Welcome back, {}!", identity.display_name),
        AuthMode::SignUp => format!("Welcome to FoodieHub, {}!", identity.display_name),
    }
}
