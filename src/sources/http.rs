use super::traits::CatalogSource;
use super::types::Catalog;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

const USER_AGENT: &str = concat!("housing-catalog/", env!("CARGO_PKG_VERSION"));

/// Catalog fetched as a JSON document over HTTP
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Create a source with a 30 second request timeout
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(url, Duration::from_secs(30))
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn load(&self) -> Result<Catalog> {
        info!("Fetching catalog from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to fetch catalog")?;

        if !response.status().is_success() {
            warn!("Catalog endpoint returned status: {}", response.status());
            anyhow::bail!("Failed to fetch catalog: {}", response.status());
        }

        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        debug!("Downloaded {} bytes of catalog JSON", body.len());

        let catalog = Catalog::from_json(&body).context("Failed to parse catalog response")?;

        info!("Fetched {} properties", catalog.properties.len());
        Ok(catalog)
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}
