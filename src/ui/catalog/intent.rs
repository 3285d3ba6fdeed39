//! Intents for the catalog view.

use crate::catalog::Catalog;
use crate::filter::SortOption;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CatalogIntent {
    /// Startup fetch succeeded. Only honoured while loading.
    Loaded { catalog: Catalog },
    /// Startup fetch failed. Only honoured while loading.
    LoadFailed { message: String },

    /// Replace the search text.
    SetSearch { text: String },
    /// Type one character into the search box.
    InsertChar(char),
    /// Backspace in the search box.
    DeleteChar,

    SetYear(Option<i32>),
    /// Step the year selector forward, wrapping through "any year".
    NextYear,
    PrevYear,

    SetSort(Option<SortOption>),
    /// Step the sort selector forward, wrapping through "no sort".
    NextSort,
    PrevSort,

    /// Reset search, year and sort.
    ClearFilters,

    /// Move the card selection by `delta` positions, clamped to the grid.
    Move { delta: isize },
}

impl Intent for CatalogIntent {}
