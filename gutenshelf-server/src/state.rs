//! Application state

use anyhow::{Context, Result};
use gutenshelf_core::loader::load_seed;
use gutenshelf_core::{CatalogConfig, CatalogSource, ControllerOptions, FetchController, GutendexClient};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Catalog configuration, fixed after startup
    pub config: Arc<CatalogConfig>,

    /// Fetch state of the browse scope
    pub catalog: Arc<FetchController>,
}

impl AppState {
    /// Create application state from environment configuration
    pub async fn new() -> Result<Self> {
        let config = CatalogConfig::from_env().context("Failed to read configuration")?;
        let client =
            GutendexClient::new(&config).context("Failed to create catalog HTTP client")?;
        tracing::info!("Using catalog at {}", client.base_url());

        Ok(Self::with_source(config, Arc::new(client)).await)
    }

    /// Load the first page once and seed the browse controller with it
    ///
    /// A failed load seeds the error, so the page shows it with a retry
    /// instead of fetching a second time.
    pub async fn with_source(config: CatalogConfig, source: Arc<dyn CatalogSource>) -> Self {
        let options = ControllerOptions::from(&config);
        let seed = load_seed(source.as_ref(), &options).await;
        let catalog = FetchController::mount(source, options, seed);

        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
        }
    }
}
