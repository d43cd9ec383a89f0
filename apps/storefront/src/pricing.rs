//! Placeholder pricing: the catalog has no prices, so each new cart line gets
//! a random one inside the configured range.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use foodie_core::pricing::PriceSource;
use foodie_core::{CatalogItem, Money};

use crate::state::StorefrontSettings;

pub struct RandomPrice {
    rng: StdRng,
    min_cents: i64,
    max_cents: i64,
}

impl RandomPrice {
    /// Seeded from the OS.
    pub fn new(min_cents: i64, max_cents: i64) -> Self {
        Self::with_rng(StdRng::from_os_rng(), min_cents, max_cents)
    }

    /// Deterministic sequence.
    pub fn seeded(seed: u64, min_cents: i64, max_cents: i64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), min_cents, max_cents)
    }

    pub fn from_settings(settings: &StorefrontSettings) -> Self {
        Self::new(settings.min_price_cents, settings.max_price_cents)
    }

    fn with_rng(rng: StdRng, min_cents: i64, max_cents: i64) -> Self {
        let (min_cents, max_cents) = if min_cents <= max_cents {
            (min_cents, max_cents)
        } else {
            (max_cents, min_cents)
        };

        RandomPrice {
            rng,
            min_cents,
            max_cents,
        }
    }
}

impl PriceSource for RandomPrice {
    fn price_for(&mut self, _item: &CatalogItem) -> Money {
        Money::from_cents(self.rng.random_range(self.min_cents..=self.max_cents))
    }
}
