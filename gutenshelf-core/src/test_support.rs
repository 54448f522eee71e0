//! In-memory catalog source for unit tests

use crate::error::{CatalogError, RemoteError, Result};
use crate::service::CatalogSource;
use crate::types::{Author, BookSummary, FetchEnvelope};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

/// What the stub answers with
#[derive(Debug, Clone)]
pub enum Reply {
    Books(u64),
    Status(u16),
    Malformed,
}

/// Build `count` numbered books
pub fn sample_books(count: u64) -> Vec<BookSummary> {
    (1..=count)
        .map(|id| {
            let mut book = BookSummary::new(id, format!("Book {}", id));
            book.authors.push(Author::new(format!("Author {}", id)));
            book
        })
        .collect()
}

/// Catalog source that counts calls and can be held at a gate
pub struct StubSource {
    calls: AtomicUsize,
    pages: Mutex<Vec<u32>>,
    replies: Mutex<Vec<Reply>>,
    gate: Option<Arc<Semaphore>>,
}

impl StubSource {
    /// Always answer with the same reply
    pub fn new(reply: Reply) -> Self {
        Self::sequence(vec![reply])
    }

    /// Answer with each reply in turn, repeating the last one
    pub fn sequence(replies: Vec<Reply>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            pages: Mutex::new(Vec::new()),
            replies: Mutex::new(replies),
            gate: None,
        }
    }

    /// Hold every call until a permit is added to `gate`
    pub fn gated(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn pages(&self) -> Vec<u32> {
        self.pages.lock().unwrap().clone()
    }

    fn next_reply(&self) -> Reply {
        let mut replies = self.replies.lock().unwrap();
        if replies.len() > 1 {
            replies.remove(0)
        } else {
            replies[0].clone()
        }
    }
}

#[async_trait]
impl CatalogSource for StubSource {
    async fn fetch_page(&self, page: u32) -> Result<FetchEnvelope> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.pages.lock().unwrap().push(page);
        let reply = self.next_reply();

        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }

        match reply {
            Reply::Books(count) => Ok(FetchEnvelope {
                total_count: count,
                next_page_token: None,
                previous_page_token: None,
                results: sample_books(count),
            }),
            Reply::Status(code) => Err(RemoteError::Status(
                StatusCode::from_u16(code).unwrap(),
            )
            .into()),
            Reply::Malformed => Err(CatalogError::MalformedResponse(
                serde_json::from_str::<FetchEnvelope>(r#"{"count": 1}"#).unwrap_err(),
            )),
        }
    }
}
