//! UI toggles. Only the auth prompt looks at another store: it stays shut
//! while a session exists.

use tracing::debug;

use foodie_core::ui::UiStore;

use crate::state::AppState;

pub fn toggle_theme(app: &AppState) {
    app.ui.with_store_mut(UiStore::toggle_theme);
}

pub fn toggle_auth_mode(app: &AppState) {
    app.ui.with_store_mut(UiStore::toggle_auth_mode);
}

pub fn open_auth_prompt(app: &AppState) {
    if app.session.with_store(|s| s.state().is_authenticated()) {
        debug!("Auth prompt suppressed, already signed in");
        return;
    }
    app.ui.with_store_mut(UiStore::open_auth_prompt);
}

pub fn dismiss_auth_prompt(app: &AppState) {
    app.ui.with_store_mut(UiStore::dismiss_auth_prompt);
}
