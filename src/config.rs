use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{AdapterError, Result};
use crate::platform::rakuten::RakutenPriceContext;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Used when RUST_LOG is not set
    pub filter: String,
    /// Directory for rolling JSON log files; console only when unset
    pub directory: Option<String>,
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "catalog_adapters=info".to_string(),
            directory: None,
            file_name: "adapters.log".to_string(),
        }
    }
}

/// Default price context applied when converting products
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub currency: Option<String>,
    pub include_tax: Option<bool>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_content = fs::read_to_string(path).map_err(|e| {
            AdapterError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }

    /// Like [`Config::load_from`], but a missing file yields the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// `None` when the config carries no pricing overrides at all
    pub fn price_context(&self) -> Option<RakutenPriceContext> {
        if self.pricing.currency.is_none() && self.pricing.include_tax.is_none() {
            return None;
        }
        Some(RakutenPriceContext {
            currency: self.pricing.currency.clone(),
            include_tax: self.pricing.include_tax,
        })
    }
}
