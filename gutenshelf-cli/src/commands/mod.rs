//! CLI command implementations

mod list;
mod show;

pub use list::list;
pub use show::show;

use anyhow::{bail, Context, Result};
use gutenshelf_core::{
    CatalogConfig, CatalogSource, FetchController, FetchState, GutendexClient, Seed,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

/// Build the catalog client for the configured base URL
fn catalog(config: &CatalogConfig) -> Result<Arc<dyn CatalogSource>> {
    let client = GutendexClient::new(config).context("Failed to create catalog HTTP client")?;
    tracing::debug!("Using catalog at {}", client.base_url());
    Ok(Arc::new(client))
}

/// Mount a controller with `seed` and wait for it to settle behind a spinner
///
/// An empty seed makes the controller fetch the catalog page itself.
async fn settle(
    source: Arc<dyn CatalogSource>,
    config: &CatalogConfig,
    seed: Seed,
) -> Result<FetchState> {
    let controller = FetchController::mount(source, config.into(), seed);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .context("Invalid spinner template")?,
    );
    spinner.set_message("Loading books...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let state = controller.settled().await;
    spinner.finish_and_clear();

    if let FetchState::Error(message) = &state {
        bail!("{}", message);
    }
    Ok(state)
}
