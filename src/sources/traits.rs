use super::types::Catalog;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for everything that can hand us a property catalog.
/// Static JSON files and HTTP endpoints both sit behind it.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load the full catalog
    async fn load(&self) -> Result<Catalog>;

    /// Get the name of the catalog source
    fn source_name(&self) -> &'static str;
}
