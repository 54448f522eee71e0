//! Book records as published by the catalog

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fallback shown when a book lists no author
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// MIME type of the cover image in `formats`
pub const COVER_MIME: &str = "image/jpeg";

/// An author, editor or translator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birth_year: None,
            death_year: None,
        }
    }

    /// Set birth and death years
    pub fn with_years(mut self, birth_year: Option<i32>, death_year: Option<i32>) -> Self {
        self.birth_year = birth_year;
        self.death_year = death_year;
        self
    }

    /// Lifespan as shown next to the author name, if any year is known
    pub fn lifespan(&self) -> Option<String> {
        match (self.birth_year, self.death_year) {
            (Some(birth), Some(death)) => Some(format!("{} - {}", birth, death)),
            (Some(birth), None) => Some(birth.to_string()),
            (None, Some(death)) => Some(format!("- {}", death)),
            (None, None) => None,
        }
    }
}

/// One catalog entry
///
/// Immutable once received. Optional upstream fields default to empty
/// when absent, required ones must be present with the right type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookSummary {
    /// Gutenberg book number
    pub id: u64,

    pub title: String,

    /// Ordered list of authors
    pub authors: Vec<Author>,

    #[serde(default)]
    pub summaries: Vec<String>,

    #[serde(default)]
    pub editors: Vec<Author>,

    #[serde(default)]
    pub translators: Vec<Author>,

    pub subjects: Vec<String>,

    #[serde(default)]
    pub bookshelves: Option<Vec<String>>,

    /// Two-letter language codes
    pub languages: Vec<String>,

    pub copyright: Option<bool>,

    pub media_type: String,

    /// MIME type to download URL
    pub formats: BTreeMap<String, String>,

    pub download_count: u64,
}

/// A downloadable format of a book
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DownloadOption {
    pub mime_type: String,
    /// Short label, the last segment of the MIME type
    pub label: String,
    pub url: String,
}

impl BookSummary {
    /// Create a book with the given id and title and no other metadata
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            authors: Vec::new(),
            summaries: Vec::new(),
            editors: Vec::new(),
            translators: Vec::new(),
            subjects: Vec::new(),
            bookshelves: None,
            languages: Vec::new(),
            copyright: None,
            media_type: "Text".to_string(),
            formats: BTreeMap::new(),
            download_count: 0,
        }
    }

    /// Get the primary author (first listed)
    pub fn primary_author(&self) -> Option<&Author> {
        self.authors.first()
    }

    /// Name of the primary author, or a placeholder
    pub fn primary_author_name(&self) -> &str {
        self.primary_author()
            .map(|a| a.name.as_str())
            .unwrap_or(UNKNOWN_AUTHOR)
    }

    /// Cover image URL, when the catalog has one
    pub fn cover_image(&self) -> Option<&str> {
        self.formats.get(COVER_MIME).map(|s| s.as_str())
    }

    /// Downloadable formats, images excluded, ordered by MIME type
    pub fn download_options(&self) -> Vec<DownloadOption> {
        self.formats
            .iter()
            .filter(|(mime, _)| !mime.contains("image/"))
            .map(|(mime, url)| DownloadOption {
                mime_type: mime.clone(),
                label: mime.rsplit('/').next().unwrap_or(mime.as_str()).to_string(),
                url: url.clone(),
            })
            .collect()
    }

    /// Human-readable copyright status
    pub fn copyright_label(&self) -> &'static str {
        match self.copyright {
            Some(true) => "Copyrighted",
            Some(false) => "Public domain",
            None => "Unknown",
        }
    }

    /// Language codes upper-cased and comma separated
    pub fn languages_label(&self) -> String {
        self.languages
            .iter()
            .map(|l| l.to_uppercase())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
