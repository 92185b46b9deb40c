//! CLI configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use auria_commerce::search::{PriceRange, ViewOptions};
use auria_commerce::Currency;
use auria_gifts::{GenerationConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL};
use auria_observability::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Shopper-facing defaults.
    #[serde(default)]
    pub store: StoreSection,

    /// Collection listing settings.
    #[serde(default)]
    pub catalog: CatalogSection,

    /// Gift recommendation service.
    #[serde(default)]
    pub gifts: GiftsSection,

    /// Process logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StoreConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }

    /// The configured default display currency.
    pub fn default_currency(&self) -> Result<Currency> {
        match Currency::from_code(&self.store.default_currency) {
            Some(currency) => Ok(currency),
            None => bail!(
                "Unsupported default_currency '{}' (expected one of: USD, INR)",
                self.store.default_currency
            ),
        }
    }

    /// Listing options derived from the `[catalog]` section.
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            bounds: PriceRange::usd(self.catalog.price_floor, self.catalog.price_ceiling),
            debounce: Duration::from_millis(self.catalog.url_debounce_ms),
        }
    }

    /// Connection settings for the gift service.
    ///
    /// The API key comes from `api_key` or, failing that, from the
    /// environment variable named by `api_key_env`.
    pub fn generation_config(&self) -> Result<GenerationConfig> {
        let api_key = match &self.gifts.api_key {
            Some(key) if !key.trim().is_empty() => key.clone(),
            _ => std::env::var(&self.gifts.api_key_env).with_context(|| {
                format!(
                    "No gift service API key: set gifts.api_key or the {} environment variable",
                    self.gifts.api_key_env
                )
            })?,
        };
        Ok(GenerationConfig::new(api_key)
            .with_endpoint(&self.gifts.endpoint)
            .with_model(&self.gifts.model)
            .with_timeout(Duration::from_secs(self.gifts.timeout_secs)))
    }
}

/// `[store]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSection {
    /// Display currency code (default: INR).
    #[serde(default = "default_currency_code")]
    pub default_currency: String,
}

fn default_currency_code() -> String {
    "INR".to_string()
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            default_currency: default_currency_code(),
        }
    }
}

/// `[catalog]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSection {
    /// Price slider lower bound in USD (default: 0).
    #[serde(default)]
    pub price_floor: i64,

    /// Price slider upper bound in USD (default: 5000).
    #[serde(default = "default_price_ceiling")]
    pub price_ceiling: i64,

    /// Delay before price changes reach the address (default: 500).
    #[serde(default = "default_url_debounce_ms")]
    pub url_debounce_ms: u64,
}

fn default_price_ceiling() -> i64 {
    auria_commerce::search::DEFAULT_PRICE_CEILING
}

fn default_url_debounce_ms() -> u64 {
    500
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            price_floor: 0,
            price_ceiling: default_price_ceiling(),
            url_debounce_ms: default_url_debounce_ms(),
        }
    }
}

/// `[gifts]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftsSection {
    /// API root of the hosted model.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name.
    #[serde(default = "default_model")]
    pub model: String,

    /// API key. Prefer `api_key_env`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_key_env() -> String {
    "AURIA_GIFT_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for GiftsSection {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: None,
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Generate a default auria.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Auria storefront configuration

[store]
default_currency = "INR"

[catalog]
price_floor = 0
price_ceiling = 5000
url_debounce_ms = 500

[gifts]
endpoint = "{endpoint}"
model = "{model}"
api_key_env = "AURIA_GIFT_API_KEY"
timeout_secs = 30

[logging]
level = "info"
format = "human"
"#,
        endpoint = DEFAULT_ENDPOINT,
        model = DEFAULT_MODEL,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use auria_observability::{LogFormat, LogLevel};

    #[test]
    fn test_default_config_file_matches_defaults() {
        let parsed: StoreConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(parsed, StoreConfig::default());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: StoreConfig = toml::from_str("").unwrap();
        assert_eq!(config.default_currency().unwrap(), Currency::INR);
        assert_eq!(config.view_options(), ViewOptions::default());
    }

    #[test]
    fn test_partial_sections() {
        let config: StoreConfig = toml::from_str(
            r#"
            [store]
            default_currency = "usd"

            [catalog]
            price_ceiling = 3000

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.default_currency().unwrap(), Currency::USD);
        assert_eq!(config.view_options().bounds, PriceRange::usd(0, 3000));
        assert_eq!(config.catalog.url_debounce_ms, 500);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_oversized_price_ceiling_saturates() {
        let config: StoreConfig =
            toml::from_str("[catalog]\nprice_ceiling = 100000000000000000\n").unwrap();
        let bounds = config.view_options().bounds;
        assert_eq!(bounds.min().amount_cents, 0);
        assert_eq!(bounds.max().amount_cents, i64::MAX);
    }

    #[test]
    fn test_unsupported_currency() {
        let mut config = StoreConfig::default();
        config.store.default_currency = "EUR".into();
        assert!(config.default_currency().is_err());
    }

    #[test]
    fn test_inline_api_key() {
        let mut config = StoreConfig::default();
        config.gifts.api_key = Some("inline-key".into());
        config.gifts.model = "gemini-test".into();
        let generation = config.generation_config().unwrap();
        assert_eq!(generation.api_key, "inline-key");
        assert!(generation.url().ends_with("/models/gemini-test:generateContent"));
    }

    #[test]
    fn test_missing_api_key() {
        let mut config = StoreConfig::default();
        config.gifts.api_key_env = "AURIA_TEST_KEY_THAT_IS_NEVER_SET".into();
        assert!(config.generation_config().is_err());
    }
}
