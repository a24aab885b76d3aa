//! Catalog Port - read-only REST boundary
//!
//! The character and item catalogs are fetched once at startup. Failures are
//! never fatal; callers substitute the fixed fallback lists.

use thiserror::Error;

use tilebrawl_shared::{CharacterDefinition, ItemDefinition};

/// Errors from the catalog endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the server answered with an error status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The response body was not the expected JSON shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogPort: Send + Sync {
    /// `GET /characters`
    async fn fetch_characters(&self) -> Result<Vec<CharacterDefinition>, ApiError>;

    /// `GET /items`
    async fn fetch_items(&self) -> Result<Vec<ItemDefinition>, ApiError>;
}
