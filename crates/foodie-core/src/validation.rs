//! # Validation Module
//!
//! Input predicates shared by the stores and the orchestrator boundary.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Rendering layer                                              │
//! │  └── Field widgets (type="email", password masking)                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Orchestrator boundary                                        │
//! │  ├── Intent deserialization                                            │
//! │  └── validate_unit_price before CartStore::add_item                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: SessionStore::login                                          │
//! │  └── THIS MODULE: email shape, password length, display name           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `is_*` predicates are total functions: they never fail, they answer
//! yes or no. The `validate_*` wrappers turn a "no" into a typed
//! [`ValidationError`].
//!
//! ## Usage
//! ```rust
//! use foodie_core::validation::{is_valid_email, is_valid_password};
//!
//! assert!(is_valid_email("test@test.com"));
//! assert!(!is_valid_email("bad-email"));
//! assert!(is_valid_password("test123"));
//! assert!(!is_valid_password("short"));
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::money::Money;
use crate::MIN_PASSWORD_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// `local@domain.tld`: no whitespace, exactly one `@`, at least one dot after it.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

// =============================================================================
// Predicates
// =============================================================================

/// Returns true when `email` has a `local@domain.tld` shape.
///
/// ```rust
/// use foodie_core::validation::is_valid_email;
///
/// assert!(is_valid_email("a@b.com"));
/// assert!(!is_valid_email("a@b"));
/// assert!(!is_valid_email("a b@c.com"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Returns true when `password` has at least [`MIN_PASSWORD_LENGTH`] characters.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

// =============================================================================
// Validators
// =============================================================================

pub fn validate_email(email: &str) -> ValidationResult<()> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

pub fn validate_password(password: &str) -> ValidationResult<()> {
    if is_valid_password(password) {
        Ok(())
    } else {
        Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        })
    }
}

/// Validates a sign-up display name.
///
/// Whitespace-only names count as empty.
pub fn validate_display_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::DisplayNameRequired);
    }

    Ok(())
}

/// Validates a unit price before it reaches `CartStore::add_item`.
///
/// Zero is allowed (free items).
///
/// ```rust
/// use foodie_core::money::Money;
/// use foodie_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_unit_price(Money::zero()).is_ok());
/// assert!(validate_unit_price(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::NegativePrice {
            cents: price.cents(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
