//! Catalog data model

mod book;
mod envelope;
mod state;

pub use book::{Author, BookSummary, DownloadOption, COVER_MIME, UNKNOWN_AUTHOR};
pub use envelope::FetchEnvelope;
pub use state::{FetchState, FetchStatus};
