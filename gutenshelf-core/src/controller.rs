//! Fetch-status controller
//!
//! Mediates between an optional seed produced by a server-side render pass
//! and a [`CatalogSource`], exposing a single [`FetchState`] plus a retry
//! trigger.
//!
//! ```text
//! idle    --(no seed, start)--> loading
//! loading --(success)---------> success
//! loading --(failure)---------> error
//! success --(retry)-----------> loading
//! error   --(retry)-----------> loading
//! ```
//!
//! The current state lives in a `tokio::sync::watch` channel; every
//! transition is also sent on a `tokio::sync::broadcast` channel so
//! followers see `loading` even when it is replaced at once. Fetches run on
//! spawned tasks that only hold a weak handle on both channels, so a result
//! arriving after the controller is gone is dropped without touching them.

use crate::config::CatalogConfig;
use crate::error::Result;
use crate::service::CatalogSource;
use crate::types::{BookSummary, FetchState};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::debug;

/// Capacity of the transition channel
const EVENT_CAPACITY: usize = 16;

/// Fixed parameters of every fetch the controller performs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Page requested on every fetch
    pub page: u32,

    /// Number of results kept from a successful fetch
    pub books_limit: usize,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self::from(&CatalogConfig::default())
    }
}

impl From<&CatalogConfig> for ControllerOptions {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            page: config.default_page,
            books_limit: config.books_limit,
        }
    }
}

/// Data already fetched by an upstream rendering pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Seed {
    pub books: Vec<BookSummary>,
    pub error: Option<String>,
}

impl Seed {
    /// No usable seed; the controller will fetch on its own
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn books(books: Vec<BookSummary>) -> Self {
        Self { books, error: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            books: Vec::new(),
            error: Some(message.into()),
        }
    }

    /// Initial state: error wins over books, books over idle
    pub fn initial_state(self) -> FetchState {
        match self.error {
            Some(message) => FetchState::Error(message),
            None if !self.books.is_empty() => FetchState::Success(self.books),
            None => FetchState::Idle,
        }
    }
}

/// Latest state plus the stream of transitions
struct StateCell {
    current: watch::Sender<FetchState>,
    events: broadcast::Sender<FetchState>,
}

impl StateCell {
    fn set(&self, next: FetchState) {
        self.current.send_replace(next.clone());
        // No followers is fine
        let _ = self.events.send(next);
    }
}

/// Owns the fetch state of one UI scope
pub struct FetchController {
    source: Arc<dyn CatalogSource>,
    options: ControllerOptions,
    state: Arc<StateCell>,
    auto_fetch_pending: AtomicBool,
}

impl FetchController {
    /// Create a controller without starting any fetch
    pub fn new(source: Arc<dyn CatalogSource>, options: ControllerOptions, seed: Seed) -> Self {
        let initial = seed.initial_state();
        let auto_fetch_pending = matches!(initial, FetchState::Idle);
        debug!("Controller initialised as {}", initial.status());

        let (current, _) = watch::channel(initial);
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            source,
            options,
            state: Arc::new(StateCell { current, events }),
            auto_fetch_pending: AtomicBool::new(auto_fetch_pending),
        }
    }

    /// Create a controller and trigger the automatic fetch if it has no seed
    ///
    /// Must be called within a tokio runtime.
    pub fn mount(source: Arc<dyn CatalogSource>, options: ControllerOptions, seed: Seed) -> Self {
        let controller = Self::new(source, options, seed);
        controller.start();
        controller
    }

    /// Issue the automatic fetch of an unseeded controller
    ///
    /// Returns `None` when the controller was seeded, or when the automatic
    /// fetch (or a retry) already happened.
    pub fn start(&self) -> Option<JoinHandle<()>> {
        if self.auto_fetch_pending.swap(false, Ordering::SeqCst) {
            Some(self.retry())
        } else {
            None
        }
    }

    /// Publish `loading`, fetch the configured page and settle
    ///
    /// Callable in any state. Concurrent retries are not de-duplicated; the
    /// last one to complete is the state observed.
    pub fn retry(&self) -> JoinHandle<()> {
        self.auto_fetch_pending.store(false, Ordering::SeqCst);
        self.state.set(FetchState::Loading);

        let state = Arc::downgrade(&self.state);
        let source = Arc::clone(&self.source);
        let options = self.options.clone();

        tokio::spawn(async move {
            let next = match fetch_books(source.as_ref(), &options).await {
                Ok(books) => FetchState::Success(books),
                Err(e) => FetchState::Error(e.to_string()),
            };
            publish(&state, next);
        })
    }

    /// Snapshot of the current state
    pub fn current_state(&self) -> FetchState {
        self.state.current.borrow().clone()
    }

    /// Follow the latest state; intermediate values may be skipped
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.current.subscribe()
    }

    /// Receive every transition from now on, in order
    pub fn events(&self) -> broadcast::Receiver<FetchState> {
        self.state.events.subscribe()
    }

    /// Wait until the state is success or error
    ///
    /// Never resolves for an idle controller that is not started.
    pub async fn settled(&self) -> FetchState {
        let mut rx = self.state.current.subscribe();
        let settled = match rx.wait_for(FetchState::is_settled).await {
            Ok(state) => state.clone(),
            Err(_) => self.current_state(),
        };
        settled
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    /// Tear down the scope; in-flight fetches complete as no-ops
    pub fn close(self) {
        debug!("Controller closed");
    }
}

/// Fetch the configured page and keep the first `books_limit` results
pub async fn fetch_books(
    source: &dyn CatalogSource,
    options: &ControllerOptions,
) -> Result<Vec<BookSummary>> {
    let envelope = source.fetch_page(options.page).await?;
    Ok(envelope.into_books(options.books_limit))
}

fn publish(state: &Weak<StateCell>, next: FetchState) {
    match state.upgrade() {
        Some(state) => {
            debug!("Fetch settled as {}", next.status());
            state.set(next);
        }
        None => debug!("Fetch completed after controller teardown, result discarded"),
    }
}
