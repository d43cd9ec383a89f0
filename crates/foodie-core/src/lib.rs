//! # foodie-core: Pure State Core for the FoodieHub Storefront
//!
//! This crate holds every piece of storefront state and the rules for
//! changing it. It has zero I/O dependencies: the catalog HTTP client, the
//! timers and the rendering layer all live outside.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     FoodieHub Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Rendering layer (out of scope)                  │   │
//! │  │    Menu grid ──► Cart panel ──► Auth prompt ──► Theme switch    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON intents (stdio)                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/storefront (orchestrator)                  │   │
//! │  │    dispatch, timers, notifications, catalog fetch tasks         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ foodie-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │   cart   │ │ session  │ │    ui    │ │     catalog      │  │   │
//! │  │   │CartStore │ │ Session  │ │ UiStore  │ │  CatalogStore    │  │   │
//! │  │   │          │ │  Store   │ │          │ │  (stale guard)   │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO TIMERS • RANDOMNESS IS INJECTED      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CatalogItem, Identity, Theme, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation and authentication errors
//! - [`validation`] - Input predicates shared by the stores
//! - [`store`] - Observer plumbing (`subscribe` / `unsubscribe`)
//! - [`cart`], [`session`], [`ui`], [`catalog`] - the state containers
//! - [`timer`] - Token-keyed cancellable timer slots
//! - [`pricing`] - Price source seam
//!
//! ## Example Usage
//!
//! ```rust
//! use foodie_core::cart::CartStore;
//! use foodie_core::{CatalogItem, Money};
//!
//! let mut cart = CartStore::new();
//! let item = CatalogItem::new("52772", "Teriyaki Chicken Casserole", "thumb.jpg", "Japanese");
//!
//! cart.add_item(&item, Money::from_cents(1000));
//! cart.add_item(&item, Money::from_cents(1000));
//!
//! assert_eq!(cart.state().lines.len(), 1);
//! assert_eq!(cart.state().total(), Money::from_cents(2000));
//! assert!(cart.state().is_panel_open);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod session;
pub mod store;
pub mod timer;
pub mod types;
pub mod ui;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{AuthenticationError, LoginError, ValidationError};
pub use money::Money;
pub use store::{Store, SubscriptionId};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum password length accepted by the login form.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Category selected when the storefront first loads.
pub const DEFAULT_CATEGORY: &str = "Indian";

/// Number of menu items shown per catalog page.
pub const DEFAULT_PAGE_SIZE: usize = 8;
