//! Book list page

use super::{error_panel, escape_html, format_count, layout};
use gutenshelf_core::{BookSummary, FetchState};

const SKELETON_CARDS: usize = 10;

/// Render the home page for the current fetch state
pub fn render_list_page(state: &FetchState, books_limit: usize) -> String {
    let mut body = format!(
        "<header>\n<h1>Book Library</h1>\n\
         <p class=\"muted\">The first {} books of Project Gutenberg</p>\n</header>\n",
        books_limit
    );

    match state {
        FetchState::Idle | FetchState::Loading => body.push_str(&skeleton()),
        FetchState::Success(books) => body.push_str(&grid(books)),
        FetchState::Error(message) => body.push_str(&error_panel(message)),
    }

    let loading = matches!(state, FetchState::Idle | FetchState::Loading);
    layout("Book Library", &body, loading)
}

fn skeleton() -> String {
    let mut html = String::from("<p class=\"muted\">Loading books...</p>\n<div class=\"grid\" aria-busy=\"true\">\n");
    for _ in 0..SKELETON_CARDS {
        html.push_str("<div class=\"skeleton\"></div>\n");
    }
    html.push_str("</div>\n");
    html
}

fn grid(books: &[BookSummary]) -> String {
    let mut html = String::from("<div class=\"grid\">\n");
    for book in books {
        html.push_str(&card(book));
    }
    html.push_str("</div>\n");
    html
}

fn card(book: &BookSummary) -> String {
    format!(
        "<a class=\"card\" href=\"/books/{id}\">\n\
         <article>\n<h3>{title}</h3>\n\
         <p class=\"muted\">{author}</p>\n\
         <p>{downloads} downloads</p>\n\
         </article>\n</a>\n",
        id = book.id,
        title = escape_html(&book.title),
        author = escape_html(book.primary_author_name()),
        downloads = format_count(book.download_count),
    )
}
