//! # foodie-catalog: Catalog Collaborator
//!
//! Fetches categories and menu items from the remote meal catalog.
//!
//! ## Module Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  loader.rs  ── CatalogLoader: errors → empty list + warn!               │
//! │     │                                                                   │
//! │  client.rs  ── CatalogSource trait, MealDbClient (reqwest)              │
//! │     │                                                                   │
//! │  wire.rs    ── TheMealDB JSON shapes → CatalogItem / Category           │
//! │  config.rs  ── base URL + timeout                                       │
//! │  error.rs   ── CatalogFetchError, is_retryable()                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use std::sync::Arc;
//! use foodie_catalog::{CatalogConfig, CatalogLoader, MealDbClient};
//!
//! # async fn demo() -> foodie_catalog::CatalogResult<()> {
//! let client = MealDbClient::new(&CatalogConfig::default())?;
//! let loader = CatalogLoader::new(Arc::new(client));
//! let menu = loader.load_items("Indian").await;
//! println!("{} items", menu.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod loader;
pub mod wire;

pub use client::{CatalogSource, MealDbClient};
pub use config::CatalogConfig;
pub use error::{CatalogFetchError, CatalogResult};
pub use loader::CatalogLoader;
