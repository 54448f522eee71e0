//! Fetch state exposed to the presentation layer

use super::BookSummary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether data is not yet requested, in flight, available, or failed
///
/// Exactly one variant holds at any instant.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success(Vec<BookSummary>),
    Error(String),
}

/// Payload-free tag of a [`FetchState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    Idle,
    Loading,
    Success,
    Error,
}

impl FetchState {
    pub fn status(&self) -> FetchStatus {
        match self {
            FetchState::Idle => FetchStatus::Idle,
            FetchState::Loading => FetchStatus::Loading,
            FetchState::Success(_) => FetchStatus::Success,
            FetchState::Error(_) => FetchStatus::Error,
        }
    }

    /// Books of a successful fetch
    pub fn books(&self) -> Option<&[BookSummary]> {
        match self {
            FetchState::Success(books) => Some(books),
            _ => None,
        }
    }

    /// Message of a failed fetch
    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Success or error
    pub fn is_settled(&self) -> bool {
        matches!(self, FetchState::Success(_) | FetchState::Error(_))
    }
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FetchStatus::Idle => "idle",
            FetchStatus::Loading => "loading",
            FetchStatus::Success => "success",
            FetchStatus::Error => "error",
        };
        f.write_str(s)
    }
}
