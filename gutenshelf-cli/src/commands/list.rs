//! List command implementation

use super::{catalog, settle};
use anyhow::Result;
use gutenshelf_core::{CatalogConfig, Seed};

/// Print the first books of the catalog
pub async fn list(config: &CatalogConfig, json: bool) -> Result<()> {
    let state = settle(catalog(config)?, config, Seed::empty()).await?;
    let books = state.books().unwrap_or_default();

    if json {
        println!("{}", serde_json::to_string_pretty(books)?);
        return Ok(());
    }

    if books.is_empty() {
        println!("No books found");
        return Ok(());
    }

    for book in books {
        println!(
            "{:>6}  {} by {} ({} downloads)",
            book.id,
            book.title,
            book.primary_author_name(),
            book.download_count
        );
    }

    Ok(())
}
