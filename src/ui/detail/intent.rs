use crate::ui::mvi::Intent;
use crate::view::BookDetail;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// Show the overlay for a book that was found in the catalog.
    Open { detail: BookDetail },
    Close,
    ScrollUp,
    /// Scroll one line down, never past `max`.
    ScrollDown { max: u16 },
}

impl Intent for DetailIntent {}
