use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Sort option outside `{title, releaseDate} x {asc, desc}`.
    #[error("Unknown sort option '{value}' (expected title-asc, title-desc, releaseDate-asc or releaseDate-desc)")]
    UnknownSortOption { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    ReleaseDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A compound `<field>-<direction>` sort selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOption {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortOption {
    /// Every selectable option, in selector order.
    pub const ALL: [SortOption; 4] = [
        SortOption::new(SortKey::Title, SortDirection::Asc),
        SortOption::new(SortKey::Title, SortDirection::Desc),
        SortOption::new(SortKey::ReleaseDate, SortDirection::Asc),
        SortOption::new(SortKey::ReleaseDate, SortDirection::Desc),
    ];

    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn as_str(&self) -> &'static str {
        match (self.key, self.direction) {
            (SortKey::Title, SortDirection::Asc) => "title-asc",
            (SortKey::Title, SortDirection::Desc) => "title-desc",
            (SortKey::ReleaseDate, SortDirection::Asc) => "releaseDate-asc",
            (SortKey::ReleaseDate, SortDirection::Desc) => "releaseDate-desc",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = FilterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let unknown = || FilterError::UnknownSortOption {
            value: value.to_string(),
        };
        let (field, order) = value.split_once('-').ok_or_else(unknown)?;

        let key = match field {
            "title" => SortKey::Title,
            "releaseDate" => SortKey::ReleaseDate,
            _ => return Err(unknown()),
        };
        let direction = match order {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => return Err(unknown()),
        };

        Ok(SortOption::new(key, direction))
    }
}

/// Current state of the search box, year selector and sort selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterQuery {
    /// Raw search text; trimmed and case-folded when applied.
    pub search: String,
    /// `None` means any year.
    pub year: Option<i32>,
    /// `None` keeps catalog order.
    pub sort: Option<SortOption>,
}

impl FilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn year(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }

    pub fn sort(mut self, sort: Option<SortOption>) -> Self {
        self.sort = sort;
        self
    }

    /// The search term as it is matched: trimmed and lowercased.
    pub fn normalized_search(&self) -> String {
        self.search.trim().to_lowercase()
    }
}
