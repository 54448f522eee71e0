//! JSON catalog handlers

use super::parse_book_id;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use gutenshelf_core::lookup::{self, Lookup};
use gutenshelf_core::{BookSummary, FetchState, FetchStatus};
use serde::Serialize;

/// Fetch state as exposed to API clients
#[derive(Debug, Serialize)]
pub struct BooksResponse {
    pub status: FetchStatus,
    pub books: Vec<BookSummary>,
    pub error: Option<String>,
}

impl From<&FetchState> for BooksResponse {
    fn from(state: &FetchState) -> Self {
        Self {
            status: state.status(),
            books: state.books().map(|b| b.to_vec()).unwrap_or_default(),
            error: state.error_message().map(|m| m.to_string()),
        }
    }
}

/// Current fetch state
pub async fn list_books(State(state): State<AppState>) -> Json<BooksResponse> {
    Json(BooksResponse::from(&state.catalog.current_state()))
}

/// Trigger a refetch; the response reflects the `loading` transition
pub async fn retry_books(State(state): State<AppState>) -> (StatusCode, Json<BooksResponse>) {
    state.catalog.retry();
    (
        StatusCode::ACCEPTED,
        Json(BooksResponse::from(&state.catalog.current_state())),
    )
}

/// A single book from the cached catalog page
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BookSummary>, StatusCode> {
    let book_id = parse_book_id(&id).ok_or(StatusCode::NOT_FOUND)?;

    let current = state.catalog.current_state();
    match lookup::resolve(&current, book_id) {
        Lookup::Found(book) => Ok(Json(book.clone())),
        Lookup::NotFound => Err(StatusCode::NOT_FOUND),
        Lookup::Pending => Err(StatusCode::SERVICE_UNAVAILABLE),
        Lookup::Unavailable(_) => Err(StatusCode::BAD_GATEWAY),
    }
}
