//! Routes

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the CORS layer
///
/// GUTENSHELF_CORS_ORIGINS can be a comma-separated list of origins, or "*" for any
fn cors_layer() -> CorsLayer {
    match std::env::var("GUTENSHELF_CORS_ORIGINS").ok() {
        Some(origins) if origins == "*" => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        Some(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed))
                .allow_methods(Any)
                .allow_headers(Any)
        }
        None => CorsLayer::new()
            .allow_origin(AllowOrigin::list([
                HeaderValue::from_static("http://localhost:3000"),
                HeaderValue::from_static("http://127.0.0.1:3000"),
            ]))
            .allow_methods(Any)
            .allow_headers(Any),
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/books", get(handlers::list_books))
        .route("/books/retry", post(handlers::retry_books))
        .route("/books/:id", get(handlers::get_book))
        .route("/sync", get(handlers::sync_events));

    Router::new()
        .route("/", get(handlers::index))
        .route("/retry", post(handlers::retry))
        .route("/books/:id", get(handlers::book_page))
        .nest("/api/v1", api_routes)
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}
