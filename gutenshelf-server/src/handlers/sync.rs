//! Server-Sent Events handler for fetch state changes

use super::BooksResponse;
use crate::state::AppState;
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::Stream;
use std::convert::Infallible;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

/// SSE endpoint emitting the current state, then one event per transition
pub async fn sync_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    // Subscribe before the snapshot so no transition falls in between
    let rx = state.catalog.events();
    let current = state.catalog.current_state();

    let transitions = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(fetch_state) => Some(fetch_state),
        Err(e) => {
            tracing::warn!("Sync follower lagged: {}", e);
            None
        }
    });

    let event_stream = tokio_stream::once(current)
        .chain(transitions)
        .filter_map(|fetch_state| {
            match serde_json::to_string(&BooksResponse::from(&fetch_state)) {
                Ok(data) => Some(Ok(Event::default().event("state").data(data))),
                Err(e) => {
                    tracing::error!("Failed to serialize fetch state: {}", e);
                    None
                }
            }
        });

    Sse::new(event_stream).keep_alive(KeepAlive::default())
}
