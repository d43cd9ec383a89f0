//! # Catalog Store
//!
//! Categories, the items of the selected category, sort and pagination.
//!
//! ## Stale Response Guard
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  select("Indian")  ──► ticket #1 ──► fetch ─────────────────┐          │
//! │  select("Thai")    ──► ticket #2 ──► fetch ───┐             │          │
//! │                                               ▼             │          │
//! │                          resolve(#2, thai) ── Applied       │          │
//! │                                                             ▼          │
//! │                          resolve(#1, indian) ──────────── Discarded    │
//! │                                                                         │
//! │  Only the most recently issued ticket can write items.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fetching itself happens outside this crate. The store issues a
//! [`FetchTicket`], the caller runs the request, then hands the ticket back
//! with the result.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::store::{Listener, Store, Subscribers, SubscriptionId};
use crate::types::{CatalogItem, Category, SortOrder};
use crate::{DEFAULT_CATEGORY, DEFAULT_PAGE_SIZE};

// =============================================================================
// Tickets
// =============================================================================

/// Tag attached to one catalog fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchTicket {
    pub category: String,
    /// Strictly increasing per store.
    pub generation: u64,
}

/// What [`CatalogStore::resolve`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// A newer ticket was issued after this one.
    Discarded,
}

// =============================================================================
// Catalog State
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogState {
    pub categories: Vec<Category>,
    pub selected_category: String,
    /// Items of the selected category, in catalog order.
    pub items: Vec<CatalogItem>,
    pub sort: SortOrder,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
    pub is_loading: bool,
}

impl Default for CatalogState {
    fn default() -> Self {
        CatalogState {
            categories: Vec::new(),
            selected_category: DEFAULT_CATEGORY.to_string(),
            items: Vec::new(),
            sort: SortOrder::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            is_loading: false,
        }
    }
}

impl CatalogState {
    /// Number of pages for the current items. Never less than 1.
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size).max(1)
    }

    /// Items on the current page, in the current sort order.
    pub fn visible_items(&self) -> Vec<CatalogItem> {
        let mut sorted: Vec<&CatalogItem> = self.items.iter().collect();
        match self.sort {
            SortOrder::Asc => sorted.sort_by(|a, b| compare_names(&a.display_name, &b.display_name)),
            SortOrder::Desc => sorted.sort_by(|a, b| compare_names(&b.display_name, &a.display_name)),
        }

        sorted
            .into_iter()
            .skip((self.page - 1) * self.page_size)
            .take(self.page_size)
            .cloned()
            .collect()
    }

    pub fn find_item(&self, item_id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|i| i.id == item_id)
    }
}

/// Case-insensitive name order; exact bytes break ties.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

// =============================================================================
// Catalog Store
// =============================================================================

#[derive(Debug, Default)]
pub struct CatalogStore {
    state: CatalogState,
    generation: u64,
    subscribers: Subscribers<CatalogState>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with a configured starting category and page size.
    ///
    /// A zero page size falls back to the default.
    pub fn with_settings(default_category: impl Into<String>, page_size: usize) -> Self {
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };

        CatalogStore {
            state: CatalogState {
                selected_category: default_category.into(),
                page_size,
                ..CatalogState::default()
            },
            generation: 0,
            subscribers: Subscribers::new(),
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn set_categories(&mut self, categories: Vec<Category>) {
        debug!(count = categories.len(), "Categories set");
        self.state.categories = categories;
        self.subscribers.notify(&self.state);
    }

    /// Selects a category and issues a ticket for its item fetch.
    ///
    /// Resets to page 1 and marks the store as loading.
    pub fn select_category(&mut self, name: impl Into<String>) -> FetchTicket {
        self.state.selected_category = name.into();
        self.state.page = 1;
        self.issue_ticket()
    }

    /// Issues a new ticket for the current category.
    pub fn refresh(&mut self) -> FetchTicket {
        self.issue_ticket()
    }

    /// Applies fetched items if `ticket` is the latest one issued.
    pub fn resolve(&mut self, ticket: &FetchTicket, items: Vec<CatalogItem>) -> FetchOutcome {
        if ticket.generation != self.generation {
            debug!(
                category = %ticket.category,
                generation = ticket.generation,
                latest = self.generation,
                "Stale catalog result discarded"
            );
            return FetchOutcome::Discarded;
        }

        debug!(category = %ticket.category, count = items.len(), "Catalog items applied");
        self.state.items = items;
        self.state.is_loading = false;
        self.state.page = self.state.page.min(self.state.page_count());
        self.subscribers.notify(&self.state);

        FetchOutcome::Applied
    }

    pub fn set_sort(&mut self, order: SortOrder) {
        if self.state.sort == order {
            return;
        }
        self.state.sort = order;
        self.subscribers.notify(&self.state);
    }

    /// Moves to `page`, clamped to `1..=page_count`.
    pub fn set_page(&mut self, page: usize) {
        let clamped = page.clamp(1, self.state.page_count());
        if clamped == self.state.page {
            return;
        }
        self.state.page = clamped;
        self.subscribers.notify(&self.state);
    }

    pub fn visible_items(&self) -> Vec<CatalogItem> {
        self.state.visible_items()
    }

    pub fn page_count(&self) -> usize {
        self.state.page_count()
    }

    fn issue_ticket(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state.is_loading = true;
        self.subscribers.notify(&self.state);

        FetchTicket {
            category: self.state.selected_category.clone(),
            generation: self.generation,
        }
    }
}

impl Store for CatalogStore {
    type State = CatalogState;

    fn state(&self) -> &CatalogState {
        &self.state
    }

    fn subscribe(&mut self, listener: Listener<CatalogState>) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(names: &[&str], category: &str) -> Vec<CatalogItem> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| CatalogItem::new(i.to_string(), *name, "", category))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let catalog = CatalogStore::new();
        assert_eq!(catalog.state().selected_category, "Indian");
        assert_eq!(catalog.state().page_size, 8);
        assert_eq!(catalog.state().page, 1);
        assert_eq!(catalog.page_count(), 1);
        assert!(catalog.visible_items().is_empty());
    }

    #[test]
    fn test_select_sets_loading_and_resets_page() {
        let mut catalog = CatalogStore::with_settings("Indian", 2);
        let t = catalog.refresh();
        catalog.resolve(&t, items(&["a", "b", "c", "d", "e"], "Indian"));
        catalog.set_page(3);
        assert_eq!(catalog.state().page, 3);

        let ticket = catalog.select_category("Thai");
        assert_eq!(ticket.category, "Thai");
        assert!(catalog.state().is_loading);
        assert_eq!(catalog.state().page, 1);
    }

    #[test]
    fn test_late_result_for_older_ticket_is_discarded() {
        let mut catalog = CatalogStore::new();
        let first = catalog.select_category("Indian");
        let second = catalog.select_category("Thai");
        assert!(second.generation > first.generation);

        let thai = items(&["Pad Thai"], "Thai");
        assert_eq!(catalog.resolve(&second, thai.clone()), FetchOutcome::Applied);
        assert!(!catalog.state().is_loading);

        let indian = items(&["Dal"], "Indian");
        assert_eq!(catalog.resolve(&first, indian), FetchOutcome::Discarded);
        assert_eq!(catalog.state().items, thai);
    }

    #[test]
    fn test_older_result_arriving_first_does_not_clear_loading() {
        let mut catalog = CatalogStore::new();
        let first = catalog.select_category("Indian");
        let _second = catalog.select_category("Thai");

        catalog.resolve(&first, items(&["Dal"], "Indian"));
        assert!(catalog.state().is_loading);
        assert!(catalog.state().items.is_empty());
    }

    #[test]
    fn test_sorting_and_pagination() {
        let mut catalog = CatalogStore::with_settings("Indian", 2);
        let t = catalog.refresh();
        catalog.resolve(&t, items(&["Curry", "Biryani", "Dal", "Aloo"], "Indian"));

        let names = |c: &CatalogStore| -> Vec<String> {
            c.visible_items().into_iter().map(|i| i.display_name).collect()
        };

        assert_eq!(catalog.page_count(), 2);
        assert_eq!(names(&catalog), vec!["Aloo", "Biryani"]);

        catalog.set_page(2);
        assert_eq!(names(&catalog), vec!["Curry", "Dal"]);

        catalog.set_sort(SortOrder::Desc);
        assert_eq!(names(&catalog), vec!["Biryani", "Aloo"]);
    }

    #[test]
    fn test_sort_ignores_case() {
        let mut catalog = CatalogStore::new();
        let t = catalog.refresh();
        catalog.resolve(
            &t,
            items(&["Chicken Handi", "beef Madras", "Aloo", "aloo"], "Indian"),
        );

        let names: Vec<String> = catalog
            .visible_items()
            .into_iter()
            .map(|i| i.display_name)
            .collect();
        assert_eq!(names, vec!["Aloo", "aloo", "beef Madras", "Chicken Handi"]);

        catalog.set_sort(SortOrder::Desc);
        assert_eq!(catalog.visible_items()[0].display_name, "Chicken Handi");
    }

    #[test]
    fn test_set_page_is_clamped() {
        let mut catalog = CatalogStore::with_settings("Indian", 2);
        let t = catalog.refresh();
        catalog.resolve(&t, items(&["a", "b", "c"], "Indian"));

        catalog.set_page(99);
        assert_eq!(catalog.state().page, 2);
        catalog.set_page(0);
        assert_eq!(catalog.state().page, 1);
    }

    #[test]
    fn test_zero_page_size_falls_back() {
        let catalog = CatalogStore::with_settings("Seafood", 0);
        assert_eq!(catalog.state().page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(catalog.state().selected_category, "Seafood");
    }
}
