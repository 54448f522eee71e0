//! Server-side page loader
//!
//! Performs the one fetch a hosting page does before handing its result to a
//! [`FetchController`](crate::controller::FetchController) as seed.

use crate::controller::{fetch_books, ControllerOptions, Seed};
use crate::service::CatalogSource;
use tracing::warn;

/// Fetch the configured page once and turn the outcome into a seed
pub async fn load_seed(source: &dyn CatalogSource, options: &ControllerOptions) -> Seed {
    match fetch_books(source, options).await {
        Ok(books) => Seed::books(books),
        Err(e) => {
            warn!("Initial catalog load failed: {}", e);
            Seed::error(e.to_string())
        }
    }
}
