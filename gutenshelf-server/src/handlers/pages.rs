//! HTML page handlers

use super::parse_book_id;
use crate::state::AppState;
use crate::views;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
};
use gutenshelf_core::lookup::{self, Lookup};

/// Home page: skeleton, card grid or error panel
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let current = state.catalog.current_state();
    Html(views::render_list_page(&current, state.config.books_limit))
}

/// Retry form target
pub async fn retry(State(state): State<AppState>) -> Redirect {
    tracing::info!("Retry requested from list page");
    state.catalog.retry();
    Redirect::to("/")
}

/// Book detail page, resolved against the cached catalog page
pub async fn book_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> (StatusCode, Html<String>) {
    let Some(book_id) = parse_book_id(&id) else {
        return (StatusCode::NOT_FOUND, Html(views::render_not_found(&id)));
    };

    let current = state.catalog.current_state();
    match lookup::resolve(&current, book_id) {
        Lookup::Found(book) => (StatusCode::OK, Html(views::render_book_page(book))),
        Lookup::NotFound => (StatusCode::NOT_FOUND, Html(views::render_not_found(&id))),
        Lookup::Pending => (StatusCode::OK, Html(views::render_book_pending())),
        Lookup::Unavailable(message) => (
            StatusCode::BAD_GATEWAY,
            Html(views::render_book_unavailable(message)),
        ),
    }
}
