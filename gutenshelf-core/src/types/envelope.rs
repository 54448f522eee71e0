//! Top-level response of the catalog API

use super::BookSummary;
use serde::{Deserialize, Serialize};

/// One page of catalog results plus pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FetchEnvelope {
    /// Total number of books matching the query upstream
    #[serde(rename = "count")]
    pub total_count: u64,

    /// URL of the next page
    #[serde(rename = "next")]
    pub next_page_token: Option<String>,

    /// URL of the previous page
    #[serde(rename = "previous")]
    pub previous_page_token: Option<String>,

    pub results: Vec<BookSummary>,
}

impl FetchEnvelope {
    /// Keep the first `limit` results, dropping pagination metadata
    pub fn into_books(self, limit: usize) -> Vec<BookSummary> {
        let mut results = self.results;
        results.truncate(limit);
        results
    }
}
