//! Show command implementation

use super::{catalog, settle};
use anyhow::{bail, Result};
use gutenshelf_core::controller::ControllerOptions;
use gutenshelf_core::loader::load_seed;
use gutenshelf_core::lookup::{self, Lookup};
use gutenshelf_core::{BookSummary, CatalogConfig};

/// Subjects printed for a book
const MAX_SUBJECTS: usize = 10;

/// Display a book from the first catalog page
pub async fn show(config: &CatalogConfig, id: u64, json: bool) -> Result<()> {
    let source = catalog(config)?;
    let seed = load_seed(source.as_ref(), &ControllerOptions::from(config)).await;
    let state = settle(source, config, seed).await?;

    let book = match lookup::resolve(&state, id) {
        Lookup::Found(book) => book,
        Lookup::Unavailable(message) => bail!("{}", message),
        Lookup::NotFound | Lookup::Pending => bail!("Book {} not found", id),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(book)?);
    } else {
        print_book(book);
    }

    Ok(())
}

fn print_book(book: &BookSummary) {
    println!("Title:       {}", book.title);
    match book.primary_author().and_then(|a| a.lifespan()) {
        Some(lifespan) => println!("Author:      {} ({})", book.primary_author_name(), lifespan),
        None => println!("Author:      {}", book.primary_author_name()),
    }
    println!("Downloads:   {}", book.download_count);
    println!("Languages:   {}", book.languages_label());
    println!("Media type:  {}", book.media_type);
    println!("Copyright:   {}", book.copyright_label());

    if !book.subjects.is_empty() {
        let subjects: Vec<&str> = book
            .subjects
            .iter()
            .take(MAX_SUBJECTS)
            .map(|s| s.as_str())
            .collect();
        println!("Subjects:    {}", subjects.join("; "));
    }
    if let Some(shelves) = book.bookshelves.as_ref().filter(|s| !s.is_empty()) {
        println!("Bookshelves: {}", shelves.join("; "));
    }

    let downloads = book.download_options();
    if !downloads.is_empty() {
        println!("Formats:");
        for option in downloads {
            println!("  {:<12} {}", option.label, option.url);
        }
    }
}
