//! HTTP client for the catalog endpoints

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use tilebrawl_shared::{CharacterDefinition, ItemDefinition};

use crate::ports::outbound::{ApiError, CatalogPort};

/// Default catalog request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Client for the server's `/characters` and `/items` endpoints
#[derive(Clone)]
pub struct HttpCatalogClient {
    client: Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Self {
        let client = match Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                tracing::warn!(
                    "Failed to build HTTP client with {}s timeout, using defaults: {}",
                    timeout_secs,
                    e
                );
                Client::new()
            }
        };

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::RequestFailed(format!(
                "{} returned {}",
                path,
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

#[async_trait::async_trait]
impl CatalogPort for HttpCatalogClient {
    async fn fetch_characters(&self) -> Result<Vec<CharacterDefinition>, ApiError> {
        self.get_json("/characters").await
    }

    async fn fetch_items(&self) -> Result<Vec<ItemDefinition>, ApiError> {
        self.get_json("/items").await
    }
}
