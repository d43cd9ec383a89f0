//! # Session Store
//!
//! Who is signed in, if anyone.
//!
//! ## Login Flow
//! ```text
//! login(email, password, mode, display_name)
//!   │
//!   ├── validate_email ──────────── fail ──► ValidationError::InvalidEmail
//!   ├── validate_password ───────── fail ──► ValidationError::PasswordTooShort
//!   │
//!   ├── mode = SignIn
//!   │     └── CredentialSet::verify ── miss ──► AuthenticationError
//!   │                                  hit ───► identity from the set
//!   │
//!   └── mode = SignUp
//!         └── validate_display_name ── fail ──► DisplayNameRequired
//!                                      ok ────► identity from the form
//! ```
//!
//! Every failure leaves the current identity untouched.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use crate::error::{AuthenticationError, LoginError};
use crate::store::{Listener, Store, Subscribers, SubscriptionId};
use crate::types::{AuthMode, Identity};
use crate::validation::{validate_display_name, validate_email, validate_password};

// =============================================================================
// Credential Set
// =============================================================================

/// One entry in the sign-in verification set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

/// Fixed set of accounts accepted by sign-in.
///
/// The default holds the two demo accounts.
#[derive(Debug, Clone)]
pub struct CredentialSet {
    entries: Vec<Credential>,
}

impl CredentialSet {
    pub fn new(entries: Vec<Credential>) -> Self {
        CredentialSet { entries }
    }

    pub fn empty() -> Self {
        CredentialSet {
            entries: Vec::new(),
        }
    }

    /// Adds an entry (builder style).
    pub fn with(
        mut self,
        email: impl Into<String>,
        password: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        self.entries.push(Credential {
            email: email.into(),
            password: password.into(),
            display_name: display_name.into(),
        });
        self
    }

    /// Exact, case-sensitive match on both fields.
    pub fn verify(&self, email: &str, password: &str) -> Option<&Credential> {
        self.entries
            .iter()
            .find(|c| c.email == email && c.password == password)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CredentialSet {
    fn default() -> Self {
        CredentialSet::empty()
            .with("test@test.com", "test123", "Test User")
            .with("demo@demo.com", "demo123", "Demo User")
    }
}

// =============================================================================
// Session State
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// `None` when signed out.
    pub identity: Option<Identity>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

// =============================================================================
// Session Store
// =============================================================================

#[derive(Debug, Default)]
pub struct SessionStore {
    state: SessionState,
    credentials: CredentialSet,
    subscribers: Subscribers<SessionState>,
}

impl SessionStore {
    /// Signed-out store using the default demo accounts.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(credentials: CredentialSet) -> Self {
        SessionStore {
            state: SessionState::default(),
            credentials,
            subscribers: Subscribers::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Attempts to establish a session.
    ///
    /// `display_name` is only read in [`AuthMode::SignUp`]. Signing in while
    /// already signed in replaces the identity.
    pub fn login(
        &mut self,
        email: &str,
        password: &str,
        mode: AuthMode,
        display_name: &str,
    ) -> Result<Identity, LoginError> {
        validate_email(email)?;
        validate_password(password)?;

        let identity = match mode {
            AuthMode::SignIn => {
                let credential = self.credentials.verify(email, password).ok_or_else(|| {
                    debug!(email, "Sign-in rejected");
                    AuthenticationError::InvalidCredentials
                })?;

                Identity {
                    display_name: credential.display_name.clone(),
                    email: email.to_string(),
                }
            }
            AuthMode::SignUp => {
                validate_display_name(display_name)?;

                Identity {
                    display_name: display_name.trim().to_string(),
                    email: email.to_string(),
                }
            }
        };

        info!(email, mode = ?mode, "Session started");
        self.state.identity = Some(identity.clone());
        self.subscribers.notify(&self.state);

        Ok(identity)
    }

    /// Ends the session. Always notifies, even when already signed out.
    pub fn logout(&mut self) {
        if let Some(identity) = self.state.identity.take() {
            info!(email = %identity.email, "Session ended");
        }
        self.subscribers.notify(&self.state);
    }
}

impl Store for SessionStore {
    type State = SessionState;

    fn state(&self) -> &SessionState {
        &self.state
    }

    fn subscribe(&mut self, listener: Listener<SessionState>) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}
