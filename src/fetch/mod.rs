//! Remote fetch adapter: a single GET returning the catalog as JSON.

mod client;
mod error;

pub use client::{decode_catalog, CatalogClient};
pub use error::{FetchError, FETCH_FAILED_MESSAGE};
