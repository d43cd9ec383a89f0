//! What the rendering layer receives after every intent.
//!
//! ```json
//! {
//!   "session": { "identity": null },
//!   "cart": { "lines": [], "isPanelOpen": false, "total": 0, "lineCount": 0 },
//!   "ui": { "theme": "light", "isAuthPromptOpen": true, ... },
//!   "catalog": { "selectedCategory": "Indian", "visibleItems": [...], "pageCount": 1, ... }
//! }
//! ```

use serde::Serialize;

use foodie_core::cart::CartState;
use foodie_core::catalog::CatalogState;
use foodie_core::session::SessionState;
use foodie_core::ui::UiState;
use foodie_core::{CatalogItem, Money};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub session: SessionState,
    pub cart: CartView,
    pub ui: UiState,
    pub catalog: CatalogView,
}

/// Cart state plus the derived figures the header and panel show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    #[serde(flatten)]
    pub state: CartState,
    pub total: Money,
    /// Header badge.
    pub line_count: usize,
}

impl From<&CartState> for CartView {
    fn from(state: &CartState) -> Self {
        CartView {
            total: state.total(),
            line_count: state.line_count(),
            state: state.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    #[serde(flatten)]
    pub state: CatalogState,
    pub visible_items: Vec<CatalogItem>,
    pub page_count: usize,
}

impl From<&CatalogState> for CatalogView {
    fn from(state: &CatalogState) -> Self {
        CatalogView {
            visible_items: state.visible_items(),
            page_count: state.page_count(),
            state: state.clone(),
        }
    }
}
