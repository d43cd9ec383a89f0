//! # API Error Type
//!
//! Unified error type for intent dispatch.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in FoodieHub                              │
//! │                                                                         │
//! │  Rendering layer              Storefront                                │
//! │  ───────────────              ──────────                                │
//! │                                                                         │
//! │  {"command":"login",...}                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Orchestrator::dispatch                                          │  │
//! │  │  Result<Snapshot, ApiError>                                      │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad JSON? ──────── serde_json::Error ──────────┐               │  │
//! │  │         │                                        │               │  │
//! │  │         ▼                                        ▼               │  │
//! │  │  Login failed? ──── LoginError ─────────────── ApiError ────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄── {"ok":false,"error":{"code":"AUTHENTICATION_ERROR",               │
//! │                           "message":"Invalid email or password"}}      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use foodie_catalog::CatalogFetchError;
use foodie_core::{AuthenticationError, LoginError, ValidationError};

use crate::state::ConfigError;

/// Error returned from a dispatched intent.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Menu item not found: 52772"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for intent responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Form input rejected
    ValidationError,

    /// Sign-in credentials did not match
    AuthenticationError,

    /// Item id not in the current menu
    NotFound,

    /// Line on stdin was not a known intent
    InvalidIntent,

    /// Anything else
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn invalid_intent(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidIntent, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::new(ErrorCode::ValidationError, err.to_string())
    }
}

impl From<AuthenticationError> for ApiError {
    fn from(err: AuthenticationError) -> Self {
        ApiError::new(ErrorCode::AuthenticationError, err.to_string())
    }
}

impl From<LoginError> for ApiError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::Validation(e) => e.into(),
            LoginError::Authentication(e) => e.into(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::invalid_intent(format!("Could not parse intent: {}", err))
    }
}

// =============================================================================
// Startup Errors
// =============================================================================

/// Failures that stop the binary before the intent loop starts.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Catalog client setup failed: {0}")]
    Catalog(#[from] CatalogFetchError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
