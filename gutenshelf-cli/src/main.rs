//! Gutenshelf CLI - browse the Gutendex catalog from the terminal

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gutenshelf_core::CatalogConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate limit argument (must be at least 1)
fn parse_limit(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("limit must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "gutenshelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Catalog base URL (overrides GUTENSHELF_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Number of books to keep from the catalog page (overrides GUTENSHELF_BOOKS_LIMIT)
    #[arg(long, global = true, value_parser = parse_limit)]
    limit: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the first books of the catalog
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display details and download links of a book
    Show {
        /// Gutenberg book id
        id: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "gutenshelf_cli=debug,gutenshelf_core=debug"
    } else {
        "gutenshelf_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = CatalogConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(limit) = cli.limit {
        config = config.with_books_limit(limit);
    }

    match cli.command {
        Commands::List { json } => commands::list(&config, json).await,
        Commands::Show { id, json } => commands::show(&config, id, json).await,
    }
}
