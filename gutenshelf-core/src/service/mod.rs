//! Catalog fetch service
//!
//! A stateless client that turns a page number into a catalog page. Every
//! call issues exactly one request; retries belong to the caller.

use crate::config::{sanitize_page, CatalogConfig};
use crate::error::{CatalogError, RemoteError, Result};
use crate::types::FetchEnvelope;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Path of the books listing, relative to the base URL
pub const BOOKS_ENDPOINT: &str = "/books";

/// Source of catalog pages
///
/// Implementations hold no per-call state and may be invoked concurrently.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch one page of the catalog (1-indexed)
    async fn fetch_page(&self, page: u32) -> Result<FetchEnvelope>;
}

/// Build the listing URL for a page
pub fn page_url(base_url: &str, page: u32) -> String {
    format!(
        "{}{}/?page={}",
        base_url.trim_end_matches('/'),
        BOOKS_ENDPOINT,
        sanitize_page(page)
    )
}

/// Gutendex API client
#[derive(Debug, Clone)]
pub struct GutendexClient {
    http: reqwest::Client,
    base_url: String,
}

impl GutendexClient {
    /// Create a client for the configured base URL
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(RemoteError::Transport)?;

        Ok(Self::with_client(http, &config.base_url))
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl CatalogSource for GutendexClient {
    async fn fetch_page(&self, page: u32) -> Result<FetchEnvelope> {
        let url = page_url(&self.base_url, page);
        debug!("Fetching catalog page {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| {
                warn!("Catalog request to {} failed: {}", url, e);
                RemoteError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Catalog responded {} for {}", status, url);
            return Err(RemoteError::Status(status).into());
        }

        let body = response.bytes().await.map_err(RemoteError::Transport)?;
        let envelope: FetchEnvelope = serde_json::from_slice(&body).map_err(|e| {
            warn!("Malformed catalog response from {}: {}", url, e);
            CatalogError::MalformedResponse(e)
        })?;

        debug!(
            "Fetched {} of {} books from page {}",
            envelope.results.len(),
            envelope.total_count,
            page
        );
        Ok(envelope)
    }
}
