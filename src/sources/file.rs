use super::traits::CatalogSource;
use super::types::Catalog;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Catalog read from a static JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonFileSource {
    async fn load(&self) -> Result<Catalog> {
        info!("Reading catalog from {}", self.path.display());

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read catalog file {}", self.path.display()))?;

        debug!("Read {} bytes of catalog JSON", raw.len());

        let catalog = Catalog::from_json(&raw)
            .with_context(|| format!("Failed to parse catalog file {}", self.path.display()))?;

        info!(
            "Loaded {} properties in {} zones",
            catalog.properties.len(),
            catalog.zones.len()
        );
        Ok(catalog)
    }

    fn source_name(&self) -> &'static str {
        "json-file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "properties": [{
            "id": "p1",
            "title": "Apartamento en Chicó",
            "property_type": "apartamento",
            "modality": "venta",
            "price": 100000000,
            "area": 50,
            "bedrooms": 2,
            "bathrooms": 1,
            "parking": false,
            "floor": null,
            "zone": {
                "id": "chico",
                "name": "Chicó",
                "locality": "Chapinero",
                "postal_code": "110221",
                "stratum": "6"
            },
            "postal_code": "110221",
            "coordinates": { "lat": 4.67, "lng": -74.05 },
            "published_at": "2024-01-01"
        }]
    }"#;

    #[tokio::test]
    async fn loads_catalog_and_derives_zones() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        tokio::fs::write(&path, CATALOG).await.unwrap();

        let catalog = JsonFileSource::new(&path).load().await.unwrap();
        assert_eq!(catalog.properties.len(), 1);
        assert_eq!(catalog.properties[0].bedrooms, Some(2));
        assert_eq!(catalog.zone_name("chico"), Some("Chicó"));
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("absent.json"));

        let err = source.load().await.unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog file"));
    }

    #[tokio::test]
    async fn malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let err = JsonFileSource::new(&path).load().await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse catalog file"));
    }
}
