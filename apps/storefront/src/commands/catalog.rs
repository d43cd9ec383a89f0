//! # Catalog Commands
//!
//! Category changes return immediately with `isLoading = true`; the fetch
//! runs on its own task and lands through [`CatalogStore::resolve`], which
//! drops results for anything but the newest ticket.
//!
//! ```text
//! select_category("Thai")
//!   ├── CatalogStore::select_category ──► FetchTicket { "Thai", #n }
//!   └── spawn ──► CatalogLoader::load_items("Thai")
//!                   └── CatalogStore::resolve(ticket, items)
//!                         ├── Applied   ──► state event on stdout
//!                         └── Discarded ──► (newer ticket exists)
//! ```

use tokio::task::JoinHandle;
use tracing::debug;

use foodie_core::catalog::{CatalogStore, FetchOutcome, FetchTicket};
use foodie_core::SortOrder;

use crate::state::AppState;

/// Loads categories and the default category's items.
pub fn bootstrap(app: &AppState) -> (JoinHandle<()>, JoinHandle<FetchOutcome>) {
    let categories = load_categories(app);
    let items = refresh(app);
    (categories, items)
}

pub fn load_categories(app: &AppState) -> JoinHandle<()> {
    let app = app.clone();
    tokio::spawn(async move {
        let categories = app.loader.load_categories().await;
        app.catalog.with_store_mut(|c| c.set_categories(categories));
        app.publish_change();
    })
}

pub fn select_category(app: &AppState, name: &str) -> JoinHandle<FetchOutcome> {
    let ticket = app.catalog.with_store_mut(|c| c.select_category(name));
    spawn_fetch(app.clone(), ticket)
}

pub fn refresh(app: &AppState) -> JoinHandle<FetchOutcome> {
    let ticket = app.catalog.with_store_mut(CatalogStore::refresh);
    spawn_fetch(app.clone(), ticket)
}

pub fn set_sort(app: &AppState, order: SortOrder) {
    app.catalog.with_store_mut(|c| c.set_sort(order));
}

pub fn set_page(app: &AppState, page: usize) {
    app.catalog.with_store_mut(|c| c.set_page(page));
}

fn spawn_fetch(app: AppState, ticket: FetchTicket) -> JoinHandle<FetchOutcome> {
    tokio::spawn(async move {
        let items = app.loader.load_items(&ticket.category).await;
        let outcome = app.catalog.with_store_mut(|c| c.resolve(&ticket, items));

        match outcome {
            FetchOutcome::Applied => app.publish_change(),
            FetchOutcome::Discarded => {
                debug!(category = %ticket.category, "Late catalog result dropped")
            }
        }
        outcome
    })
}
