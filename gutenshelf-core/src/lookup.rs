//! Detail lookup over the last fetched page
//!
//! There is no per-book endpoint: a book is only reachable by id while it
//! is part of the cached first page.

use crate::types::{BookSummary, FetchState};

/// Outcome of resolving a book id against the current fetch state
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<'a> {
    Found(&'a BookSummary),
    /// The page is loaded but does not contain the id
    NotFound,
    /// Nothing fetched yet
    Pending,
    /// The last fetch failed
    Unavailable(&'a str),
}

/// Linear search by id
pub fn find_book(books: &[BookSummary], id: u64) -> Option<&BookSummary> {
    books.iter().find(|b| b.id == id)
}

/// Resolve an id against a fetch state
pub fn resolve(state: &FetchState, id: u64) -> Lookup<'_> {
    match state {
        FetchState::Success(books) => match find_book(books, id) {
            Some(book) => Lookup::Found(book),
            None => Lookup::NotFound,
        },
        FetchState::Idle | FetchState::Loading => Lookup::Pending,
        FetchState::Error(message) => Lookup::Unavailable(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_books;

    #[test]
    fn test_found_and_not_found() {
        let state = FetchState::Success(sample_books(10));

        match resolve(&state, 7) {
            Lookup::Found(book) => assert_eq!(book.title, "Book 7"),
            other => panic!("expected book 7, got {:?}", other),
        }
        assert_eq!(resolve(&state, 11), Lookup::NotFound);
    }

    #[test]
    fn test_not_found_is_distinct_from_fetch_error() {
        assert_eq!(resolve(&FetchState::Loading, 1), Lookup::Pending);
        assert_eq!(resolve(&FetchState::Idle, 1), Lookup::Pending);
        assert_eq!(
            resolve(&FetchState::Error("down".to_string()), 1),
            Lookup::Unavailable("down")
        );
    }
}
