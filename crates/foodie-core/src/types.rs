//! # Domain Types
//!
//! Shared value types used by more than one store.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CatalogItem    │   │    Identity     │   │     Theme       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  display_name   │   │  Light          │       │
//! │  │  display_name   │   │  email          │   │  Dark           │       │
//! │  │  image_ref      │   └─────────────────┘   └─────────────────┘       │
//! │  │  category       │                                                    │
//! │  └─────────────────┘   ┌─────────────────┐   ┌─────────────────┐       │
//! │                        │    AuthMode     │   │   SortOrder     │       │
//! │  ┌─────────────────┐   │  ─────────────  │   │  ─────────────  │       │
//! │  │    Category     │   │  SignIn         │   │  Asc (A-Z)      │       │
//! │  │  name           │   │  SignUp         │   │  Desc (Z-A)     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Catalog
// =============================================================================

/// A menu item as delivered by the catalog collaborator.
///
/// The catalog carries no price; a price is attached when the item is added
/// to the cart (see [`crate::pricing`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Catalog identifier (e.g. TheMealDB `idMeal`).
    pub id: String,

    /// Name shown on the menu card.
    pub display_name: String,

    /// Thumbnail URL.
    pub image_ref: String,

    /// Category the item was listed under.
    pub category: String,
}

impl CatalogItem {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        image_ref: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        CatalogItem {
            id: id.into(),
            display_name: display_name.into(),
            image_ref: image_ref.into(),
            category: category.into(),
        }
    }
}

/// A catalog category (TheMealDB calls these "areas").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Category { name: name.into() }
    }
}

/// Menu ordering by display name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// A-Z
    #[default]
    Asc,
    /// Z-A
    Desc,
}

// =============================================================================
// Session
// =============================================================================

/// The authenticated user. Holds no secret material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub display_name: String,
    pub email: String,
}

/// Which form the auth prompt submits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// Check against the verification set.
    #[default]
    SignIn,
    /// Create a session for a new display name, no registry lookup.
    SignUp,
}

impl AuthMode {
    /// Returns the other mode (the "Sign Up" / "Sign In" link in the form).
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }
}

// =============================================================================
// UI
// =============================================================================

/// Colour theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}
