//! # Stdio Protocol
//!
//! One JSON object per line in each direction.
//!
//! ```text
//! stdin  ─► {"command":"add_to_cart","args":{"item_id":"52772"}}
//! stdout ◄─ {"ok":true,"snapshot":{...}}
//!
//! stdin  ─► {"command":"login","args":{"email":"x","password":"y"}}
//! stdout ◄─ {"event":"notification","notification":{"kind":"error","message":"..."}}
//! stdout ◄─ {"ok":false,"error":{"code":"VALIDATION_ERROR","message":"..."}}
//!
//! (3 s after checkout)
//! stdout ◄─ {"event":"state","snapshot":{...}}
//! ```

use serde::{Deserialize, Serialize};

use foodie_core::{AuthMode, SortOrder};

use crate::error::ApiError;
use crate::notify::Notification;
use crate::state::Snapshot;

/// A user action forwarded by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", content = "args", rename_all = "snake_case")]
pub enum Intent {
    GetState,

    // Cart
    AddToCart { item_id: String },
    RemoveFromCart { item_id: String },
    ClearCart,
    ToggleCart,
    Checkout,

    // Session
    Login {
        email: String,
        password: String,
        #[serde(default)]
        name: Option<String>,
        /// Falls back to the auth form's current mode.
        #[serde(default)]
        mode: Option<AuthMode>,
    },
    Logout,

    // UI
    ToggleTheme,
    ToggleAuthMode,
    OpenAuthPrompt,
    DismissAuthPrompt,

    // Catalog
    SelectCategory { name: String },
    RefreshCatalog,
    SetSort { order: SortOrder },
    SetPage { page: usize },
}

impl Intent {
    /// Wire name of the command. Used for logging instead of `Debug`, which
    /// would print the password.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::GetState => "get_state",
            Intent::AddToCart { .. } => "add_to_cart",
            Intent::RemoveFromCart { .. } => "remove_from_cart",
            Intent::ClearCart => "clear_cart",
            Intent::ToggleCart => "toggle_cart",
            Intent::Checkout => "checkout",
            Intent::Login { .. } => "login",
            Intent::Logout => "logout",
            Intent::ToggleTheme => "toggle_theme",
            Intent::ToggleAuthMode => "toggle_auth_mode",
            Intent::OpenAuthPrompt => "open_auth_prompt",
            Intent::DismissAuthPrompt => "dismiss_auth_prompt",
            Intent::SelectCategory { .. } => "select_category",
            Intent::RefreshCatalog => "refresh_catalog",
            Intent::SetSort { .. } => "set_sort",
            Intent::SetPage { .. } => "set_page",
        }
    }
}

/// Reply to one intent.
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<Snapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

/// Something that happened without a matching intent on stdin.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Notification { notification: Notification },
    State { snapshot: Snapshot },
}

/// One line written to stdout.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Outbound {
    Response(Response),
    Event(Event),
}

impl Outbound {
    pub fn from_result(result: Result<Snapshot, ApiError>) -> Self {
        let response = match result {
            Ok(snapshot) => Response {
                ok: true,
                snapshot: Some(snapshot),
                error: None,
            },
            Err(error) => Response {
                ok: false,
                snapshot: None,
                error: Some(error),
            },
        };
        Outbound::Response(response)
    }

    /// Serializes to a single line (no trailing newline).
    pub fn to_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            let fallback = Outbound::from_result(Err(ApiError::internal(format!(
                "Could not encode response: {}",
                e
            ))));
            serde_json::to_string(&fallback).unwrap_or_default()
        })
    }
}
