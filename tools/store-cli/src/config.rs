//! CLI configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use store_data::ContentStoreConfig;
use store_observability::LogConfig;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Hosted content store connection.
    #[serde(default)]
    pub content_store: ContentStoreConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LogConfig,

    /// Local catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl StoreConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    /// Parse config text, choosing the format by file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Overlay environment variables onto the file settings.
    pub fn apply_env(&mut self) {
        self.content_store.apply_env();
    }
}

/// Local catalog settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON fixture to browse instead of the content store.
    #[serde(default)]
    pub fixture: Option<PathBuf>,
}
