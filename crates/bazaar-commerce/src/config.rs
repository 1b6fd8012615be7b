//! Store configuration.
//!
//! Pricing constants, the promo table, simulated latencies and asset paths.
//! Every section has defaults, so an empty file is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cart::PromoRule;
use crate::error::CommerceError;
use crate::money::{Currency, Money};

/// Top-level store configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Tax and shipping.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Accepted promo codes.
    #[serde(default = "default_promos")]
    pub promos: Vec<PromoRule>,

    /// Checkout wizard settings.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Catalog search settings.
    #[serde(default)]
    pub search: SearchConfig,

    /// Static image locations.
    #[serde(default)]
    pub images: ImageConfig,

    /// Artisan inventory board settings.
    #[serde(default)]
    pub inventory: InventoryConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            pricing: PricingConfig::default(),
            promos: default_promos(),
            checkout: CheckoutConfig::default(),
            search: SearchConfig::default(),
            images: ImageConfig::default(),
            inventory: InventoryConfig::default(),
        }
    }
}

impl StoreConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        let config: StoreConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, CommerceError> {
        let config: StoreConfig = serde_json::from_str(content)
            .map_err(|e| CommerceError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a file; `.json` is parsed as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CommerceError::ConfigError(format!("failed to read {}: {}", path.display(), e))
        })?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Reject values the pricing rules cannot work with.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if !(0..=10_000).contains(&self.pricing.tax_rate_bps) {
            return Err(CommerceError::ConfigError(format!(
                "tax_rate_bps must be within 0..=10000, got {}",
                self.pricing.tax_rate_bps
            )));
        }
        if self.pricing.flat_shipping_fee < 0 {
            return Err(CommerceError::ConfigError(
                "flat_shipping_fee must not be negative".to_string(),
            ));
        }
        for promo in &self.promos {
            promo.validate()?;
        }
        if self.search.per_page == 0 {
            return Err(CommerceError::ConfigError(
                "search.per_page must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Tax and shipping constants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingConfig {
    /// Store currency code.
    #[serde(default = "default_currency")]
    pub currency: Currency,

    /// Tax rate in basis points (1800 = 18%).
    #[serde(default = "default_tax_rate_bps")]
    pub tax_rate_bps: i64,

    /// Fee charged once per order when any item lacks free shipping.
    #[serde(default = "default_flat_shipping_fee")]
    pub flat_shipping_fee: i64,
}

impl PricingConfig {
    /// The flat fee as money.
    pub fn shipping_fee(&self) -> Money {
        Money::new(self.flat_shipping_fee, self.currency)
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            tax_rate_bps: default_tax_rate_bps(),
            flat_shipping_fee: default_flat_shipping_fee(),
        }
    }
}

fn default_currency() -> Currency {
    Currency::INR
}

fn default_tax_rate_bps() -> i64 {
    1800
}

fn default_flat_shipping_fee() -> i64 {
    99
}

fn default_promos() -> Vec<PromoRule> {
    vec![PromoRule::percentage("SAVE10", "10% off your order", 10)]
}

/// Checkout wizard settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutConfig {
    /// Artificial delay before an order is confirmed.
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
        }
    }
}

fn default_submit_delay_ms() -> u64 {
    2000
}

/// Catalog search settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Artificial delay behind the search loading indicator.
    #[serde(default = "default_loading_delay_ms")]
    pub loading_delay_ms: u64,

    /// Products per marketplace page.
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            loading_delay_ms: default_loading_delay_ms(),
            per_page: default_per_page(),
        }
    }
}

fn default_loading_delay_ms() -> u64 {
    300
}

fn default_per_page() -> usize {
    12
}

/// Static image locations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageConfig {
    /// Root of the images directory.
    #[serde(default = "default_image_base")]
    pub base_path: String,

    /// Shown once when an image fails to load.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_path: default_image_base(),
            placeholder: default_placeholder(),
        }
    }
}

fn default_image_base() -> String {
    "/images".to_string()
}

fn default_placeholder() -> String {
    "/images/placeholder.svg".to_string()
}

/// Artisan inventory board settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryConfig {
    /// Stock at or below this level is flagged as low.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: i64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: default_low_stock_threshold(),
        }
    }
}

fn default_low_stock_threshold() -> i64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::PromoKind;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = StoreConfig::from_toml_str("").unwrap();
        assert_eq!(config.pricing.tax_rate_bps, 1800);
        assert_eq!(config.pricing.flat_shipping_fee, 99);
        assert_eq!(config.pricing.currency, Currency::INR);
        assert_eq!(config.checkout.submit_delay_ms, 2000);
        assert_eq!(config.promos.len(), 1);
        assert_eq!(config.promos[0].code, "SAVE10");
    }

    #[test]
    fn test_default_matches_empty_document() {
        let parsed = StoreConfig::from_toml_str("").unwrap();
        assert_eq!(parsed, StoreConfig::default());
    }

    #[test]
    fn test_toml_overrides() {
        let config = StoreConfig::from_toml_str(
            r#"
            [pricing]
            flat_shipping_fee = 49

            [[promos]]
            code = "WELCOME50"
            description = "Flat 50 off"
            kind = "fixed"
            value = 50

            [checkout]
            submit_delay_ms = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.pricing.flat_shipping_fee, 49);
        assert_eq!(config.pricing.tax_rate_bps, 1800);
        assert_eq!(config.checkout.submit_delay_ms, 10);
        assert_eq!(config.promos.len(), 1);
        assert_eq!(config.promos[0].kind, PromoKind::Fixed);
    }

    #[test]
    fn test_json_config() {
        let config = StoreConfig::from_json_str(r#"{"pricing": {"tax_rate_bps": 500}}"#).unwrap();
        assert_eq!(config.pricing.tax_rate_bps, 500);
        assert_eq!(config.promos[0].code, "SAVE10");
    }

    #[test]
    fn test_rejects_bad_tax_rate() {
        let err = StoreConfig::from_toml_str("[pricing]\ntax_rate_bps = 20000\n").unwrap_err();
        assert!(matches!(err, CommerceError::ConfigError(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = StoreConfig::from_toml_str("[pricing\n").unwrap_err();
        assert!(matches!(err, CommerceError::ConfigError(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = StoreConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, CommerceError::ConfigError(_)));
    }
}
