//! Non-interactive `list` and `show` commands.
//!
//! Same pipeline as the UI: one fetch, then pure filtering and the same
//! display models, written as plain text.

use std::io::Write;

use anyhow::{anyhow, Context};
use tokio::runtime::Handle;

use crate::catalog::{Book, Catalog};
use crate::config::Config;
use crate::fetch::CatalogClient;
use crate::filter::{apply_filters, FilterQuery};
use crate::view::{BookCard, BookDetail};

/// Fetches the catalog once. Errors carry only the user-facing message;
/// details go to the log.
pub fn load_catalog(config: &Config, runtime: &Handle) -> anyhow::Result<Catalog> {
    let client = CatalogClient::new(&config.source).map_err(|err| {
        tracing::error!("{}", err);
        anyhow!(err.user_message())
    })?;
    let books = runtime
        .block_on(client.fetch_catalog())
        .map_err(|err| anyhow!(err.user_message()))?;

    Catalog::new(books).map_err(|err| {
        tracing::error!("Rejecting catalog: {}", err);
        anyhow!(err.user_message())
    })
}

/// Writes one card per matching book, separated by blank lines.
pub fn list(
    config: &Config,
    runtime: &Handle,
    query: &FilterQuery,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let catalog = load_catalog(config, runtime)?;
    let books = apply_filters(catalog.books(), query);
    tracing::debug!(shown = books.len(), total = catalog.len(), "Listing catalog");
    write_cards(&books, config, out)
}

pub fn write_cards(
    books: &[Book],
    config: &Config,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for book in books {
        let card = BookCard::from_book(book, &config.display);
        writeln!(out, "{}\n", card).context("Failed to write output")?;
    }
    Ok(())
}

/// Writes the detail view of book `number`.
pub fn show(
    config: &Config,
    runtime: &Handle,
    number: u32,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let catalog = load_catalog(config, runtime)?;
    let book = catalog.lookup(number).map_err(|err| {
        tracing::warn!(number, "Detail requested for a book that is not in the catalog");
        anyhow!(err.user_message())
    })?;
    let detail = BookDetail::from_book(book, &config.display);
    writeln!(out, "{}", detail).context("Failed to write output")?;
    Ok(())
}
