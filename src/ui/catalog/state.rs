//! State for the catalog view.

use crate::catalog::{Book, Catalog};
use crate::filter::{FilterQuery, SortOption};
use crate::ui::mvi::UiState;

/// Catalog lifecycle: waiting for the fetch, failed for good, or browsable.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    /// Startup fetch still in flight.
    #[default]
    Loading,

    /// Fetch failed. Terminal for the session; controls stay inert.
    Failed { message: String },

    /// Catalog loaded.
    Ready(CatalogView),
}

impl UiState for CatalogState {}

impl CatalogState {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn view(&self) -> Option<&CatalogView> {
        match self {
            Self::Ready(view) => Some(view),
            _ => None,
        }
    }
}

/// The full catalog plus everything derived from the current controls.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    /// Full list; never filtered in place.
    pub catalog: Catalog,
    /// Year selector options, computed once at load.
    pub years: Vec<i32>,
    pub query: FilterQuery,
    /// Filtered subset currently on screen.
    pub visible: Vec<Book>,
    /// Index into `visible`.
    pub selected: usize,
}

impl CatalogView {
    pub fn selected_book(&self) -> Option<&Book> {
        self.visible.get(self.selected)
    }

    pub fn year_label(&self) -> String {
        match self.query.year {
            Some(year) => year.to_string(),
            None => "Any year".to_string(),
        }
    }

    pub fn sort_label(&self) -> &'static str {
        self.query.sort.as_ref().map_or("No sort", SortOption::as_str)
    }
}
