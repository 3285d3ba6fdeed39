//! Interactive terminal UI: card grid, controls and the detail overlay.

pub mod app;
pub mod cards;
pub mod catalog;
pub mod detail;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
