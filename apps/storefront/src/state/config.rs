//! # Storefront Configuration
//!
//! ## Load Order (later overrides earlier)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Defaults          StorefrontConfig::default()                       │
//! │  2. Config file       storefront.toml (explicit path or config dir)     │
//! │  3. Environment       FOODIE_* variables                                │
//! │  4. validate()        URL scheme, page size, price range                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example `storefront.toml`
//! ```toml
//! [catalog]
//! base_url = "https://www.themealdb.com/api/json/v1/1/"
//! timeout_secs = 10
//!
//! [storefront]
//! default_category = "Indian"
//! page_size = 8
//! settle_delay_ms = 3000
//! celebration_ms = 3000
//! min_price_cents = 500
//! max_price_cents = 2000
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use foodie_catalog::CatalogConfig;
use foodie_core::{DEFAULT_CATEGORY, DEFAULT_PAGE_SIZE};

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    LoadFailed(String),

    #[error("Invalid storefront configuration: {0}")]
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::LoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::LoadFailed(err.to_string())
    }
}

// =============================================================================
// [storefront] section
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontSettings {
    #[serde(default = "default_category")]
    pub default_category: String,

    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Delay between checkout and the cart panel closing.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// How long the post-checkout overlay stays up.
    #[serde(default = "default_celebration_ms")]
    pub celebration_ms: u64,

    #[serde(default = "default_min_price_cents")]
    pub min_price_cents: i64,

    #[serde(default = "default_max_price_cents")]
    pub max_price_cents: i64,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_settle_delay_ms() -> u64 {
    3000
}

fn default_celebration_ms() -> u64 {
    3000
}

fn default_min_price_cents() -> i64 {
    500
}

fn default_max_price_cents() -> i64 {
    2000
}

impl Default for StorefrontSettings {
    fn default() -> Self {
        StorefrontSettings {
            default_category: default_category(),
            page_size: default_page_size(),
            settle_delay_ms: default_settle_delay_ms(),
            celebration_ms: default_celebration_ms(),
            min_price_cents: default_min_price_cents(),
            max_price_cents: default_max_price_cents(),
        }
    }
}

impl StorefrontSettings {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn celebration(&self) -> Duration {
        Duration::from_millis(self.celebration_ms)
    }
}

// =============================================================================
// Storefront Config
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub storefront: StorefrontSettings,
}

impl StorefrontConfig {
    /// Loads configuration from file, environment, and defaults.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.catalog
            .parsed_base_url()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        if self.storefront.page_size == 0 {
            return Err(ConfigError::Invalid(
                "page_size must be greater than 0".into(),
            ));
        }

        let s = &self.storefront;
        if s.min_price_cents < 0 || s.min_price_cents > s.max_price_cents {
            return Err(ConfigError::Invalid(format!(
                "price range {}..={} cents is not valid",
                s.min_price_cents, s.max_price_cents
            )));
        }

        if s.default_category.trim().is_empty() {
            return Err(ConfigError::Invalid("default_category is empty".into()));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `FOODIE_*` overrides from `lookup`. Unparseable numbers are
    /// ignored with a warning.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("FOODIE_CATALOG_URL") {
            debug!(url = %url, "Overriding catalog URL from environment");
            self.catalog.base_url = url;
        }

        if let Some(secs) = parse_var(&lookup, "FOODIE_CATALOG_TIMEOUT_SECS") {
            self.catalog.timeout_secs = secs;
        }

        if let Some(category) = lookup("FOODIE_DEFAULT_CATEGORY") {
            self.storefront.default_category = category;
        }

        if let Some(size) = parse_var(&lookup, "FOODIE_PAGE_SIZE") {
            self.storefront.page_size = size;
        }

        if let Some(ms) = parse_var(&lookup, "FOODIE_SETTLE_DELAY_MS") {
            self.storefront.settle_delay_ms = ms;
        }

        if let Some(ms) = parse_var(&lookup, "FOODIE_CELEBRATION_MS") {
            self.storefront.celebration_ms = ms;
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "foodiehub", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring unparseable environment override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = StorefrontConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.storefront.default_category, "Indian");
        assert_eq!(config.storefront.settle_delay(), Duration::from_secs(3));
    }

    #[test]
    fn test_load_from_file_with_partial_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[catalog]
base_url = "http://localhost:9000/api"

[storefront]
page_size = 12
"#
        )
        .unwrap();

        let config = StorefrontConfig::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.catalog.base_url, "http://localhost:9000/api");
        assert_eq!(config.catalog.timeout_secs, 10);
        assert_eq!(config.storefront.page_size, 12);
        assert_eq!(config.storefront.celebration_ms, 3000);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = StorefrontConfig::load(Some(path)).unwrap();
        assert_eq!(config.storefront, StorefrontSettings::default());
    }

    #[test]
    fn test_malformed_file_is_load_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[storefront\npage_size = ").unwrap();

        let err = StorefrontConfig::load(Some(file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, ConfigError::LoadFailed(_)));
    }

    #[test]
    fn test_overrides_apply_and_bad_numbers_are_ignored() {
        let vars: HashMap<&str, &str> = [
            ("FOODIE_CATALOG_URL", "http://mock.local/"),
            ("FOODIE_PAGE_SIZE", "four"),
            ("FOODIE_SETTLE_DELAY_MS", "250"),
            ("FOODIE_DEFAULT_CATEGORY", "Thai"),
        ]
        .into_iter()
        .collect();

        let mut config = StorefrontConfig::default();
        config.apply_overrides(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.catalog.base_url, "http://mock.local/");
        assert_eq!(config.storefront.page_size, 8);
        assert_eq!(config.storefront.settle_delay_ms, 250);
        assert_eq!(config.storefront.default_category, "Thai");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = StorefrontConfig::default();
        config.storefront.page_size = 0;
        assert!(config.validate().is_err());

        let mut config = StorefrontConfig::default();
        config.storefront.min_price_cents = 3000;
        assert!(config.validate().is_err());

        let mut config = StorefrontConfig::default();
        config.catalog.base_url = "nota url".into();
        assert!(config.validate().is_err());
    }
}
