//! CLI configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use basket_cart::prelude::DEFAULT_CART_KEY;
use basket_cart::Currency;
use basket_checkout::{SubmitConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use serde::{Deserialize, Serialize};

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["basket.toml", ".basket.toml", "basket.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the cart is persisted.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Order submission.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Display options.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Product catalog.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl CliConfig {
    /// Load config from a file. JSON if the name ends in `.json`, TOML otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Submission settings for the order transport.
    pub fn submit_config(&self) -> SubmitConfig {
        let timeout = match self.checkout.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        SubmitConfig::new(self.checkout.endpoint.clone()).with_timeout(timeout)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Cart storage configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON file per key.
    #[serde(default = "default_storage_dir")]
    pub dir: String,

    /// Key the cart is stored under.
    #[serde(default = "default_key")]
    pub key: String,
}

fn default_storage_dir() -> String {
    ".basket".to_string()
}

fn default_key() -> String {
    DEFAULT_CART_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
            key: default_key(),
        }
    }
}

/// Order submission configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Order endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds. 0 disables the timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Display configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency used to format amounts.
    #[serde(default)]
    pub currency: Currency,
}

/// Catalog configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path of the products JSON file.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    "products.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Generate a default basket.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Basket configuration

[storage]
# Relative paths are resolved against this file's directory.
dir = "{dir}"
key = "{key}"

[checkout]
endpoint = "{endpoint}"
# Seconds; 0 waits indefinitely.
timeout_secs = {timeout}

[display]
# One of BRL, USD, EUR, GBP.
currency = "BRL"

[catalog]
path = "{catalog}"
"#,
        dir = default_storage_dir(),
        key = DEFAULT_CART_KEY,
        endpoint = DEFAULT_ENDPOINT,
        timeout = DEFAULT_TIMEOUT.as_secs(),
        catalog = default_catalog_path(),
    )
}
