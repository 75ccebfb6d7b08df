use crate::catalog::{FilterSet, SortKey};
use crate::sources::{CatalogSource, HttpSource, JsonFileSource};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

pub const CONFIG_PATH_VAR: &str = "HOUSING_CATALOG_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "catalog.config.json";

/// Where the catalog is loaded from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceConfig {
    File(PathBuf),
    Url(String),
}

/// Runtime settings for the catalog binary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub page_size: usize,
    pub sort: SortKey,
    pub http_timeout_secs: u64,
    /// Filters applied on start-up
    pub filters: FilterSet,
    pub output_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::File(PathBuf::from("data/catalog.json")),
            page_size: 12,
            sort: SortKey::default(),
            http_timeout_secs: 30,
            filters: FilterSet::default(),
            output_dir: PathBuf::from("output"),
        }
    }
}

impl AppConfig {
    /// Read the config file named by `HOUSING_CATALOG_CONFIG` (or the
    /// default path, if it exists) and apply environment overrides
    pub async fn load() -> Result<Self> {
        let path = env::var(CONFIG_PATH_VAR).map(PathBuf::from).ok();
        let explicit = path.is_some();
        let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        let found = tokio::fs::try_exists(&path).await.unwrap_or(false);
        let mut config = if explicit || found {
            Self::from_file(&path).await?
        } else {
            debug!("No config file at {}, using defaults", path.display());
            Self::default()
        };

        config.apply_env(|key| env::var(key).ok())?;
        Ok(config)
    }

    pub async fn from_file(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Override settings from `CATALOG_PATH`, `CATALOG_URL` and
    /// `CATALOG_PAGE_SIZE`. A URL wins over a path when both are set.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(path) = lookup("CATALOG_PATH") {
            self.source = SourceConfig::File(PathBuf::from(path));
        }
        if let Some(url) = lookup("CATALOG_URL") {
            self.source = SourceConfig::Url(url);
        }
        if let Some(size) = lookup("CATALOG_PAGE_SIZE") {
            self.page_size = size
                .parse()
                .with_context(|| format!("Invalid CATALOG_PAGE_SIZE: {size}"))?;
        }
        Ok(())
    }

    /// Build the configured catalog source
    pub fn catalog_source(&self) -> Result<Box<dyn CatalogSource>> {
        let source: Box<dyn CatalogSource> = match &self.source {
            SourceConfig::File(path) => Box::new(JsonFileSource::new(path)),
            SourceConfig::Url(url) => Box::new(HttpSource::with_timeout(
                url.as_str(),
                Duration::from_secs(self.http_timeout_secs),
            )?),
        };
        Ok(source)
    }
}
