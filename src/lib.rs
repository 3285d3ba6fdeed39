//! Terminal viewer for a remote book catalog.
//!
//! The catalog is fetched once ([`fetch`]), held immutably ([`catalog`]),
//! narrowed by pure search/year/sort functions ([`filter`]) and shown as
//! cards with a detail overlay ([`view`], [`ui`]).

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod fetch;
pub mod filter;
pub mod logging;
pub mod ui;
pub mod view;
