//! Search, year filter and sort over the catalog.
//!
//! Everything here is pure: the same books and query always produce the
//! same subset, and the input slice is left untouched.

mod engine;
mod query;

pub use engine::{apply_filters, compare_books, compare_titles, distinct_years, sort_books};
pub use query::{FilterError, FilterQuery, SortDirection, SortKey, SortOption};
