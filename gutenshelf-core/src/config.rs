//! Catalog configuration read once at startup

use crate::error::ConfigError;
use std::time::Duration;

/// Default upstream catalog
pub const DEFAULT_BASE_URL: &str = "https://gutendex.com";
/// Page requested by every fetch
pub const DEFAULT_PAGE: u32 = 1;
/// Number of results kept from a fetched page
pub const DEFAULT_BOOKS_LIMIT: usize = 10;

/// Configuration for the catalog client and the fetch controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Base URL of the Gutendex-compatible API, without trailing slash
    pub base_url: String,

    /// Page number requested on every fetch (1-indexed)
    pub default_page: u32,

    /// Maximum number of books exposed after a successful fetch
    pub books_limit: usize,

    /// Transport timeout; `None` leaves the HTTP client default in place
    pub request_timeout: Option<Duration>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_page: DEFAULT_PAGE,
            books_limit: DEFAULT_BOOKS_LIMIT,
            request_timeout: None,
        }
    }
}

impl CatalogConfig {
    /// Read configuration from `GUTENSHELF_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup("GUTENSHELF_API_BASE_URL").filter(|v| !v.trim().is_empty())
        {
            config = config.with_base_url(base_url);
        }
        if let Some(page) = lookup("GUTENSHELF_DEFAULT_PAGE") {
            config.default_page = parse_var("GUTENSHELF_DEFAULT_PAGE", &page)?;
        }
        if let Some(limit) = lookup("GUTENSHELF_BOOKS_LIMIT") {
            config.books_limit = parse_var("GUTENSHELF_BOOKS_LIMIT", &limit)?;
            if config.books_limit == 0 {
                return Err(ConfigError::InvalidValue {
                    name: "GUTENSHELF_BOOKS_LIMIT",
                    value: limit,
                });
            }
        }
        if let Some(secs) = lookup("GUTENSHELF_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = parse_var("GUTENSHELF_REQUEST_TIMEOUT_SECS", &secs)?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        config.default_page = sanitize_page(config.default_page);
        Ok(config)
    }

    /// Replace the base URL, dropping any trailing slash
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Replace the display limit
    pub fn with_books_limit(mut self, books_limit: usize) -> Self {
        self.books_limit = books_limit;
        self
    }
}

/// Sanitize page number (treat 0 as 1)
pub fn sanitize_page(page: u32) -> u32 {
    page.max(1)
}

fn parse_var<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        })
}
