//! Display models for the card grid and the detail overlay.
//!
//! Missing book fields are replaced with fixed placeholder text here and
//! nowhere else. Both models carry plain strings only; nothing from the API
//! is ever interpreted as markup or styling.

use std::fmt;

use crate::catalog::Book;
use crate::config::DisplaySettings;

pub const NO_TITLE: &str = "No title";
pub const UNKNOWN_DATE: &str = "Unknown date";
pub const NO_DESCRIPTION: &str = "No description available";
pub const NO_COVER: &str = "No image available";
pub const NO_DETAIL_COVER: &str = "Picture can't be found";
pub const NO_PAGES: &str = "No pages";
pub const NO_ORIGINAL_TITLE: &str = "Unknown";
pub const ELLIPSIS: &str = "...";

/// Cuts `text` to `max_chars` characters and appends `...` if it was longer.
///
/// The cut is on character boundaries, not words.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str(ELLIPSIS);
    cut
}

/// One card in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCard {
    /// Identifier the card's "read more" action is bound to.
    pub number: u32,
    pub title: String,
    pub release_date: String,
    /// Truncated description.
    pub description: String,
    pub cover: String,
    pub pages: String,
    pub genre: String,
}

impl BookCard {
    pub fn from_book(book: &Book, display: &DisplaySettings) -> Self {
        let description = text_or(&book.description, NO_DESCRIPTION);
        Self {
            number: book.number,
            title: text_or(&book.title, NO_TITLE),
            release_date: text_or(&book.release_date, UNKNOWN_DATE),
            description: truncate_text(&description, display.description_limit),
            cover: text_or(&book.cover, NO_COVER),
            pages: pages_or(book.pages, NO_PAGES),
            genre: display.genre.clone(),
        }
    }
}

impl fmt::Display for BookCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#{} {}", self.number, self.title)?;
        writeln!(f, "  Cover: {}", self.cover)?;
        writeln!(f, "  {}", self.description)?;
        writeln!(f, "  Release date: {}", self.release_date)?;
        writeln!(f, "  Number of pages: {}", self.pages)?;
        write!(f, "  Genre: {}", self.genre)
    }
}

/// Everything the detail overlay shows for one book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetail {
    pub number: u32,
    pub title: String,
    pub original_title: String,
    pub release_date: String,
    pub pages: String,
    pub genre: String,
    /// Full, untruncated description.
    pub description: String,
    pub cover: String,
}

impl BookDetail {
    pub fn from_book(book: &Book, display: &DisplaySettings) -> Self {
        Self {
            number: book.number,
            title: text_or(&book.title, NO_TITLE),
            original_title: text_or(&book.original_title, NO_ORIGINAL_TITLE),
            release_date: text_or(&book.release_date, UNKNOWN_DATE),
            pages: pages_or(book.pages, NO_PAGES),
            genre: display.genre.clone(),
            description: text_or(&book.description, NO_DESCRIPTION),
            cover: text_or(&book.cover, NO_DETAIL_COVER),
        }
    }

    /// Label/value rows in overlay order.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("Original title", self.original_title.as_str()),
            ("Release date", self.release_date.as_str()),
            ("Pages", self.pages.as_str()),
            ("Genre", self.genre.as_str()),
            ("Cover", self.cover.as_str()),
        ]
    }
}

impl fmt::Display for BookDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for (label, value) in self.fields() {
            writeln!(f, "{}: {}", label, value)?;
        }
        writeln!(f)?;
        write!(f, "{}", self.description)
    }
}

fn text_or(value: &Option<String>, fallback: &str) -> String {
    match value.as_deref() {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => fallback.to_string(),
    }
}

fn pages_or(pages: Option<u32>, fallback: &str) -> String {
    match pages {
        Some(count) if count > 0 => count.to_string(),
        _ => fallback.to_string(),
    }
}
