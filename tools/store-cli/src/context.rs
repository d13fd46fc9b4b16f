//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use store_commerce::catalog::{CatalogReader, InMemoryCatalog};
use store_data::ContentStoreCatalog;

use crate::config::StoreConfig;
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["store.toml", ".store.toml", "store.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: StoreConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from a config file, then apply environment and flag
    /// overrides.
    pub fn load(
        config_path: Option<&str>,
        catalog_fixture: Option<&str>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let mut config = if let Some(path) = config_path {
            StoreConfig::load(path)?
        } else {
            Self::find_config(&cwd, &output).unwrap_or_default()
        };
        config.apply_env();

        if let Some(fixture) = catalog_fixture {
            config.catalog.fixture = Some(PathBuf::from(fixture));
        }

        Ok(Self {
            config,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path, output: &Output) -> Option<StoreConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match StoreConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some(config),
                        Err(e) => output.warn(&format!(
                            "Ignoring {}: {:#}",
                            config_path.display(),
                            e
                        )),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Open the catalog: the fixture if one is configured, else the content
    /// store.
    pub fn open_catalog(&self) -> Result<Box<dyn CatalogReader>> {
        if let Some(fixture) = &self.config.catalog.fixture {
            let path = self.resolve_path(fixture);
            self.output
                .debug(&format!("Using catalog fixture {}", path.display()));
            let catalog = InMemoryCatalog::load(&path)
                .with_context(|| format!("Failed to load catalog fixture: {}", path.display()))?;
            return Ok(Box::new(catalog));
        }

        let store = &self.config.content_store;
        self.output.debug(&format!("Using content store {}", store.query_url()));
        let catalog = ContentStoreCatalog::connect(store.clone()).context(
            "Content store is not configured; set SANITY_PROJECT_ID or pass --catalog <fixture.json>",
        )?;
        Ok(Box::new(catalog))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}
