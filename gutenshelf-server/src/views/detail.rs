//! Book detail page

use super::{error_panel, escape_html, format_count, layout};
use gutenshelf_core::BookSummary;

/// Subjects shown on the detail page
const MAX_SUBJECTS: usize = 10;

const BACK_LINK: &str = "<p><a href=\"/\">&larr; Back</a></p>\n";

/// Render the detail view of a book
pub fn render_book_page(book: &BookSummary) -> String {
    let mut body = String::from(BACK_LINK);

    if let Some(cover) = book.cover_image() {
        body.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" width=\"192\">\n",
            escape_html(cover),
            escape_html(&book.title)
        ));
    }

    body.push_str(&format!("<h2>{}</h2>\n", escape_html(&book.title)));

    let author = book.primary_author();
    let lifespan = author
        .and_then(|a| a.lifespan())
        .map(|span| format!(" <span>({})</span>", escape_html(&span)))
        .unwrap_or_default();
    body.push_str(&format!(
        "<p class=\"muted\">{}{}</p>\n",
        escape_html(book.primary_author_name()),
        lifespan
    ));
    body.push_str(&format!(
        "<p>{} downloads</p>\n",
        format_count(book.download_count)
    ));

    if !book.subjects.is_empty() {
        body.push_str(&badges("Subjects", book.subjects.iter().take(MAX_SUBJECTS)));
    }
    if let Some(shelves) = book.bookshelves.as_ref().filter(|s| !s.is_empty()) {
        body.push_str(&badges("Bookshelves", shelves.iter()));
    }

    body.push_str(&format!(
        "<dl>\n<dt>Languages</dt><dd>{}</dd>\n<dt>Media type</dt><dd>{}</dd>\n\
         <dt>Copyright</dt><dd>{}</dd>\n</dl>\n",
        escape_html(&book.languages_label()),
        escape_html(&book.media_type),
        book.copyright_label()
    ));

    let downloads = book.download_options();
    if !downloads.is_empty() {
        body.push_str("<section>\n<h3>Download</h3>\n<ul>\n");
        for option in downloads {
            body.push_str(&format!(
                "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" title=\"{}\">{}</a></li>\n",
                escape_html(&option.url),
                escape_html(&option.mime_type),
                escape_html(&option.label)
            ));
        }
        body.push_str("</ul>\n</section>\n");
    }

    layout(&book.title, &body, false)
}

/// Page for an id missing from the cached catalog page
pub fn render_not_found(id: &str) -> String {
    let body = format!(
        "{}<h2>Book not found</h2>\n<p class=\"muted\">No book with id {} in the current catalog page.</p>\n",
        BACK_LINK,
        escape_html(id)
    );
    layout("Book not found", &body, false)
}

/// Page shown while the catalog is still loading
pub fn render_book_pending() -> String {
    let body = format!(
        "{}<p class=\"muted\">Loading book...</p>\n<div class=\"skeleton\"></div>\n",
        BACK_LINK
    );
    layout("Loading", &body, true)
}

/// Page shown when the catalog fetch failed
pub fn render_book_unavailable(message: &str) -> String {
    let body = format!("{}{}", BACK_LINK, error_panel(message));
    layout("Catalog unavailable", &body, false)
}

fn badges<'a>(heading: &str, items: impl Iterator<Item = &'a String>) -> String {
    let mut html = format!("<section>\n<h3>{}</h3>\n<div>", heading);
    for item in items {
        html.push_str(&format!("<span class=\"badge\">{}</span>", escape_html(item)));
    }
    html.push_str("</div>\n</section>\n");
    html
}
