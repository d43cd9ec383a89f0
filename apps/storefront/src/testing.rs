//! Test fixtures shared by the command and dispatch tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use foodie_catalog::{CatalogFetchError, CatalogResult, CatalogSource};
use foodie_core::pricing::FixedPrice;
use foodie_core::{CatalogItem, Category, Money};

use crate::notify::recording::RecordingNotifier;
use crate::state::{AppState, StorefrontConfig};

/// Menu items with ids "0", "1", ... in the "Indian" category.
pub fn menu(names: &[&str]) -> Vec<CatalogItem> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| CatalogItem::new(i.to_string(), *name, format!("{}.jpg", i), "Indian"))
        .collect()
}

/// In-memory catalog with an optional per-category delay.
#[derive(Default)]
pub struct StaticCatalog {
    pub categories: Vec<Category>,
    pub items: HashMap<String, Vec<CatalogItem>>,
    pub delays: HashMap<String, Duration>,
    pub failing: bool,
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        if self.failing {
            return Err(CatalogFetchError::Network("offline".into()));
        }
        Ok(self.categories.clone())
    }

    async fn list_items_by_category(&self, category: &str) -> CatalogResult<Vec<CatalogItem>> {
        if let Some(delay) = self.delays.get(category) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing {
            return Err(CatalogFetchError::Status { status: 502 });
        }
        Ok(self.items.get(category).cloned().unwrap_or_default())
    }
}

pub fn app_with_source(source: StaticCatalog) -> (AppState, Arc<RecordingNotifier>) {
    let notes = Arc::new(RecordingNotifier::default());
    let app = AppState::new(
        StorefrontConfig::default(),
        Arc::new(source),
        Box::new(FixedPrice(Money::from_cents(1000))),
        notes.clone(),
    );
    (app, notes)
}

/// App whose catalog store already shows `items`.
pub fn app_with_menu(items: Vec<CatalogItem>) -> (AppState, Arc<RecordingNotifier>) {
    let (app, notes) = app_with_source(StaticCatalog::default());
    app.catalog.with_store_mut(|c| {
        let ticket = c.refresh();
        c.resolve(&ticket, items);
    });
    (app, notes)
}
