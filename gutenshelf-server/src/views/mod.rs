//! HTML rendering
//!
//! Pages are a pure function of the fetch state. Every piece of catalog
//! text goes through [`escape_html`] before it reaches the markup.

mod detail;
mod list;

pub use detail::{render_book_page, render_book_pending, render_book_unavailable, render_not_found};
pub use list::render_list_page;

/// Seconds between reloads while a fetch is in flight
const LOADING_REFRESH_SECS: u32 = 2;

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;padding:2rem;background:#fafafa;color:#111}\
main{max-width:72rem;margin:0 auto}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(16rem,1fr));gap:1rem}\
.card{display:block;border:1px solid #ddd;border-radius:.5rem;padding:1rem;background:#fff;color:inherit;text-decoration:none}\
.card:hover{box-shadow:0 2px 8px rgba(0,0,0,.1)}\
.skeleton{height:6rem;border-radius:.5rem;background:#eee}\
.muted{color:#666}\
.badge{display:inline-block;margin:0 .25rem .25rem 0;padding:.1rem .6rem;border-radius:.375rem;background:#111;color:#fff;font-size:.75rem}\
.error{border:1px solid #e5a4a4;background:#fff5f5;border-radius:.5rem;padding:1.5rem;text-align:center}";

/// Escape text for HTML element content and attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Group digits by thousands (`1234567` -> `1,234,567`)
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Wrap a page body in the shared document shell
fn layout(title: &str, body: &str, refresh: bool) -> String {
    let refresh = if refresh {
        format!(
            "<meta http-equiv=\"refresh\" content=\"{}\">",
            LOADING_REFRESH_SECS
        )
    } else {
        String::new()
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         {refresh}<title>{title}</title>\n<style>{STYLE}</style>\n</head>\n\
         <body>\n<main>\n{body}</main>\n</body>\n</html>\n",
        refresh = refresh,
        title = escape_html(title),
        body = body,
    )
}

/// Error panel with a retry form
fn error_panel(message: &str) -> String {
    format!(
        "<div class=\"error\" role=\"alert\">\n\
         <h2>Could not load books</h2>\n\
         <p class=\"muted\">{}</p>\n\
         <form method=\"post\" action=\"/retry\"><button type=\"submit\">Retry</button></form>\n\
         </div>\n",
        escape_html(message)
    )
}
