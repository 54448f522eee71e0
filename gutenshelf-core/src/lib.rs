//! Gutenshelf Core Library
//!
//! This crate provides the catalog data model, the Gutendex fetch service and
//! the fetch-status controller shared by the Gutenshelf web and terminal
//! front-ends. A page loader fetches once on the server side and seeds the
//! controller, which only fetches on its own when it received no usable seed.

pub mod config;
pub mod controller;
pub mod error;
pub mod loader;
pub mod lookup;
pub mod service;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::CatalogConfig;
pub use controller::{ControllerOptions, FetchController, Seed};
pub use error::{CatalogError, ConfigError, RemoteError, Result};
pub use lookup::Lookup;
pub use service::{CatalogSource, GutendexClient};
pub use types::{Author, BookSummary, DownloadOption, FetchEnvelope, FetchState, FetchStatus};
