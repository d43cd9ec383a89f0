//! # State Module
//!
//! Owns every store for the lifetime of the process.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  AppState::new (construction order is fixed)                           │
//! │    1. session   SharedStore<SessionStore>                              │
//! │    2. cart      SharedStore<CartStore>                                 │
//! │    3. ui        SharedStore<UiStore>                                   │
//! │    4. catalog   SharedStore<CatalogStore>                              │
//! │                                                                         │
//! │  plus: timers (settle, celebration), price source, catalog loader,     │
//! │        notifier, config                                                │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Each store sits behind its own Arc<Mutex<T>>                        │
//! │  • A lock is held for one synchronous store operation, never across    │
//! │    an .await                                                           │
//! │  • AppState is Clone; timer and fetch tasks get their own handle       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod snapshot;

pub use config::{ConfigError, ConfigResult, StorefrontConfig, StorefrontSettings};
pub use snapshot::{CartView, CatalogView, Snapshot};

use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use foodie_catalog::{CatalogLoader, CatalogSource};
use foodie_core::cart::CartStore;
use foodie_core::catalog::CatalogStore;
use foodie_core::pricing::PriceSource;
use foodie_core::session::{CredentialSet, SessionStore};
use foodie_core::timer::TimerSlot;
use foodie_core::ui::UiStore;

use crate::notify::Notifier;

// =============================================================================
// Shared Store
// =============================================================================

/// A store shared between the dispatch loop and background tasks.
#[derive(Debug)]
pub struct SharedStore<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> SharedStore<S> {
    pub fn new(store: S) -> Self {
        SharedStore {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = app.cart.with_store(|cart| cart.state().total());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&S) -> R,
    {
        let store = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// app.cart.with_store_mut(|cart| cart.remove_item("52772"));
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut S) -> R,
    {
        let mut store = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }
}

impl<S> Clone for SharedStore<S> {
    fn clone(&self) -> Self {
        SharedStore {
            inner: Arc::clone(&self.inner),
        }
    }
}

// =============================================================================
// Timers
// =============================================================================

/// The two orchestrator-owned timers.
#[derive(Debug, Default)]
pub struct Timers {
    /// Closes the cart panel after checkout.
    pub settle: TimerSlot,
    /// Ends the post-checkout overlay.
    pub celebration: TimerSlot,
}

// =============================================================================
// App State
// =============================================================================

#[derive(Clone)]
pub struct AppState {
    pub session: SharedStore<SessionStore>,
    pub cart: SharedStore<CartStore>,
    pub ui: SharedStore<UiStore>,
    pub catalog: SharedStore<CatalogStore>,

    pub timers: SharedStore<Timers>,
    pub prices: SharedStore<Box<dyn PriceSource>>,
    pub loader: CatalogLoader,
    pub notifier: Arc<dyn Notifier>,
    pub config: Arc<StorefrontConfig>,
}

impl AppState {
    pub fn new(
        config: StorefrontConfig,
        source: Arc<dyn CatalogSource>,
        prices: Box<dyn PriceSource>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::with_credentials(config, CredentialSet::default(), source, prices, notifier)
    }

    pub fn with_credentials(
        config: StorefrontConfig,
        credentials: CredentialSet,
        source: Arc<dyn CatalogSource>,
        prices: Box<dyn PriceSource>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let session = SharedStore::new(SessionStore::with_credentials(credentials));
        let cart = SharedStore::new(CartStore::new());
        let ui = SharedStore::new(UiStore::new());
        let catalog = SharedStore::new(CatalogStore::with_settings(
            config.storefront.default_category.clone(),
            config.storefront.page_size,
        ));
        debug!("Stores initialized: session, cart, ui, catalog");

        AppState {
            session,
            cart,
            ui,
            catalog,
            timers: SharedStore::new(Timers::default()),
            prices: SharedStore::new(prices),
            loader: CatalogLoader::new(source),
            notifier,
            config: Arc::new(config),
        }
    }

    /// Point-in-time copy of every store.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            session: self.session.with_store(|s| s.state().clone()),
            cart: self.cart.with_store(|c| CartView::from(c.state())),
            ui: self.ui.with_store(|u| u.state().clone()),
            catalog: self.catalog.with_store(|c| CatalogView::from(c.state())),
        }
    }

    /// Tells the notifier about a change made outside intent dispatch.
    pub fn publish_change(&self) {
        self.notifier.state_changed(&self.snapshot());
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
