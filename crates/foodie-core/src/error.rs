//! # Error Types
//!
//! Domain-specific error types for foodie-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  foodie-core errors (this file)                                        │
//! │  ├── ValidationError      - Malformed login/signup input               │
//! │  ├── AuthenticationError  - Credential mismatch                        │
//! │  └── LoginError           - Either of the above                        │
//! │                                                                         │
//! │  foodie-catalog errors (separate crate)                                │
//! │  └── CatalogFetchError    - Collaborator failure (degrades to empty)   │
//! │                                                                         │
//! │  storefront errors (in app)                                            │
//! │  └── ApiError             - What the rendering layer sees              │
//! │                                                                         │
//! │  Flow: ValidationError → LoginError → ApiError → Notification          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are fatal. Every failure path leaves store state unchanged.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Recoverable: the user corrects the form and resubmits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Email does not have a `local@domain.tld` shape.
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// Password shorter than the minimum length.
    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },

    /// Sign-up submitted without a display name.
    #[error("Please enter your name")]
    DisplayNameRequired,

    /// Unit price below zero reached the cart boundary.
    #[error("Price must not be negative (got {cents} cents)")]
    NegativePrice { cents: i64 },
}

// =============================================================================
// Authentication Error
// =============================================================================

/// Credential mismatch during sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthenticationError {
    /// No entry in the verification set matches the email/password pair.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

// =============================================================================
// Login Error
// =============================================================================

/// Failure result of `SessionStore::login`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Authentication(#[from] AuthenticationError),
}

// =============================================================================
// Unit Tests
// =============================================================================
