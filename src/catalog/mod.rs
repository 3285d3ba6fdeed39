//! Book records and the immutable catalog built from the startup fetch.

mod book;
mod store;

pub use book::{parse_release_date, Book};
pub use store::{Catalog, CatalogError};
