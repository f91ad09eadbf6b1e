use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use vitrine_core::api_routes::MEDIA_CATALOG;
use vitrine_model::{Catalog, CatalogResponse};

use crate::error::FetchError;

/// Where a browser gets its catalog from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full catalog once.
    async fn fetch_catalog(&self) -> Result<Catalog, FetchError>;
}

/// Catalog source backed by the server's HTTP endpoint.
#[derive(Clone)]
pub struct HttpCatalogSource {
    client: Client,
    origin: String,
}

impl std::fmt::Debug for HttpCatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCatalogSource")
            .field("origin", &self.origin)
            .finish()
    }
}

impl HttpCatalogSource {
    pub fn new(origin: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder().build().map_err(FetchError::Transport)?;
        Ok(Self::with_client(client, origin))
    }

    pub fn with_client(client: Client, origin: impl Into<String>) -> Self {
        let origin = origin.into().trim_end_matches('/').to_string();
        info!("[HttpCatalogSource] using origin {}", origin);
        Self { client, origin }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn catalog_url(&self) -> String {
        format!("{}{}", self.origin, MEDIA_CATALOG)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_catalog(&self) -> Result<Catalog, FetchError> {
        let url = self.catalog_url();
        debug!("[HttpCatalogSource] GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(FetchError::Transport)?;
        let payload: CatalogResponse =
            serde_json::from_slice(&body).map_err(FetchError::Decode)?;

        debug!(
            "[HttpCatalogSource] received {} entries",
            payload.files.len()
        );
        Ok(payload.files)
    }
}
