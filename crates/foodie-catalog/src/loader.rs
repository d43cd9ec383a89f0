//! Degrading wrapper around a [`CatalogSource`].
//!
//! The menu never shows an error page: a failed fetch renders as an empty
//! list and a warning in the log.

use std::sync::Arc;

use tracing::warn;

use foodie_core::{CatalogItem, Category};

use crate::client::CatalogSource;

#[derive(Clone)]
pub struct CatalogLoader {
    source: Arc<dyn CatalogSource>,
}

impl CatalogLoader {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        CatalogLoader { source }
    }

    pub async fn load_categories(&self) -> Vec<Category> {
        match self.source.list_categories().await {
            Ok(categories) => categories,
            Err(e) => {
                warn!(error = %e, retryable = e.is_retryable(), "Category fetch failed, showing none");
                Vec::new()
            }
        }
    }

    pub async fn load_items(&self, category: &str) -> Vec<CatalogItem> {
        match self.source.list_items_by_category(category).await {
            Ok(items) => items,
            Err(e) => {
                warn!(
                    category,
                    error = %e,
                    retryable = e.is_retryable(),
                    "Item fetch failed, showing empty menu"
                );
                Vec::new()
            }
        }
    }
}

impl std::fmt::Debug for CatalogLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogLoader").finish_non_exhaustive()
    }
}
