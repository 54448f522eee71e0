//! Request handlers

mod books;
mod pages;
mod sync;

pub use books::*;
pub use pages::*;
pub use sync::*;

use axum::Json;
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Parse a book id from a path segment
///
/// Anything that is not a number cannot match a catalog entry.
fn parse_book_id(id: &str) -> Option<u64> {
    id.trim().parse().ok()
}
