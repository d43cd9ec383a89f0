//! # Pricing Seam
//!
//! The catalog carries no prices. A [`PriceSource`] assigns one when an item
//! first enters the cart; the cart then keeps that price for the line.

use crate::money::Money;
use crate::types::CatalogItem;

/// Supplies a unit price for a catalog item.
pub trait PriceSource: Send {
    fn price_for(&mut self, item: &CatalogItem) -> Money;
}

/// Same price for every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPrice(pub Money);

impl PriceSource for FixedPrice {
    fn price_for(&mut self, _item: &CatalogItem) -> Money {
        self.0
    }
}
