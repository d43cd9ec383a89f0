//! # UI-Mode Store
//!
//! Display toggles that are not tied to cart or session data.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::store::{Listener, Store, Subscribers, SubscriptionId};
use crate::types::{AuthMode, Theme};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub theme: Theme,
    /// The sign-in prompt shows on first load.
    pub is_auth_prompt_open: bool,
    pub auth_mode: AuthMode,
    /// Post-checkout overlay.
    pub is_celebrating: bool,
}

impl Default for UiState {
    fn default() -> Self {
        UiState {
            theme: Theme::default(),
            is_auth_prompt_open: true,
            auth_mode: AuthMode::default(),
            is_celebrating: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct UiStore {
    state: UiState,
    subscribers: Subscribers<UiState>,
}

impl UiStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn toggle_theme(&mut self) {
        self.state.theme = self.state.theme.toggled();
        debug!(theme = ?self.state.theme, "Theme toggled");
        self.subscribers.notify(&self.state);
    }

    /// Switches the auth form between sign-in and sign-up.
    pub fn toggle_auth_mode(&mut self) {
        self.state.auth_mode = self.state.auth_mode.toggled();
        self.subscribers.notify(&self.state);
    }

    pub fn open_auth_prompt(&mut self) {
        self.set_auth_prompt(true);
    }

    pub fn dismiss_auth_prompt(&mut self) {
        self.set_auth_prompt(false);
    }

    pub fn start_celebration(&mut self) {
        self.set_celebrating(true);
    }

    pub fn end_celebration(&mut self) {
        self.set_celebrating(false);
    }

    fn set_auth_prompt(&mut self, open: bool) {
        if self.state.is_auth_prompt_open == open {
            return;
        }
        self.state.is_auth_prompt_open = open;
        debug!(open, "Auth prompt visibility changed");
        self.subscribers.notify(&self.state);
    }

    fn set_celebrating(&mut self, on: bool) {
        if self.state.is_celebrating == on {
            return;
        }
        self.state.is_celebrating = on;
        self.subscribers.notify(&self.state);
    }
}

impl Store for UiStore {
    type State = UiState;

    fn state(&self) -> &UiState {
        &self.state
    }

    fn subscribe(&mut self, listener: Listener<UiState>) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}
