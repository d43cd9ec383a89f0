//! Catalog endpoint settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CatalogFetchError, CatalogResult};

/// Public TheMealDB v1 endpoint (free test key `1`).
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1/";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// `[catalog]` section of the storefront config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CatalogConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        CatalogConfig {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Parses `base_url`, adding the trailing slash `Url::join` needs.
    pub fn parsed_base_url(&self) -> CatalogResult<Url> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }

        let url = Url::parse(&raw)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(CatalogFetchError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                other
            ))),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
