use crate::catalog::{Book, Catalog, CatalogError};
use crate::config::DisplaySettings;
use crate::fetch::FetchError;
use crate::ui::catalog::{CatalogIntent, CatalogReducer, CatalogState};
use crate::ui::detail::{detail_popup, max_scroll, DetailDialogState, DetailIntent, DetailReducer};
use crate::ui::layout::{body_rect, grid_columns};
use crate::ui::mvi::Reducer;
use crate::view::BookDetail;
use ratatui::layout::Rect;

/// Which control receives plain keystrokes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Cards,
    Search,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Controller owning every piece of session state.
///
/// Key handling and the fetch task talk to it through intents; drawing only
/// reads from it.
pub struct App {
    should_quit: bool,
    focus: Focus,
    size: Option<(u16, u16)>,
    /// Card columns at the current width, used for vertical moves.
    columns: usize,
    display: DisplaySettings,
    /// Full catalog and filtered subset (MVI pattern).
    catalog: CatalogState,
    /// Detail overlay (MVI pattern).
    detail: DetailDialogState,
    /// Latest user-facing notice, e.g. a failed lookup.
    notice: Option<String>,
    ticks: u64,
}

impl App {
    pub fn new(display: DisplaySettings) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Cards,
            size: None,
            columns: 1,
            display,
            catalog: CatalogState::default(),
            detail: DetailDialogState::default(),
            notice: None,
            ticks: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Search focus is only reachable once there is something to search.
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = match focus {
            Focus::Search if !self.catalog.is_ready() => Focus::Cards,
            other => other,
        };
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn detail(&self) -> &DetailDialogState {
        &self.detail
    }

    pub fn display(&self) -> &DisplaySettings {
        &self.display
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn on_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        let body = body_rect(Rect::new(0, 0, cols, rows));
        self.columns = grid_columns(body.width);
    }

    /// Feeds the startup fetch result in. Later calls are ignored.
    pub fn on_catalog_loaded(&mut self, result: Result<Vec<Book>, FetchError>) {
        let intent = match result {
            Ok(books) => match Catalog::new(books) {
                Ok(catalog) => {
                    tracing::info!(count = catalog.len(), "Catalog ready");
                    CatalogIntent::Loaded { catalog }
                }
                Err(err) => {
                    tracing::error!("Rejecting catalog: {}", err);
                    CatalogIntent::LoadFailed {
                        message: err.user_message().to_string(),
                    }
                }
            },
            Err(err) => CatalogIntent::LoadFailed {
                message: err.user_message().to_string(),
            },
        };
        self.dispatch_catalog(intent);
    }

    /// Runs a catalog intent. Any control change clears a stale notice.
    pub fn dispatch_catalog(&mut self, intent: CatalogIntent) {
        if !matches!(intent, CatalogIntent::Move { .. }) {
            self.notice = None;
        }
        dispatch_mvi!(self, catalog, CatalogReducer, intent);
    }

    pub fn dispatch_detail(&mut self, intent: DetailIntent) {
        dispatch_mvi!(self, detail, DetailReducer, intent);
    }

    /// Moves the card selection by whole grid rows.
    pub fn move_rows(&mut self, rows: isize) {
        let delta = rows * self.columns as isize;
        self.dispatch_catalog(CatalogIntent::Move { delta });
    }

    /// Opens the detail overlay for `number`, looked up in the full catalog.
    ///
    /// A miss leaves the card grid and overlay untouched and posts a notice.
    pub fn show_details(&mut self, number: u32) -> Result<(), CatalogError> {
        let lookup = match self.catalog.view() {
            Some(view) => view
                .catalog
                .lookup(number)
                .map(|book| BookDetail::from_book(book, &self.display)),
            None => Err(CatalogError::BookNotFound { number }),
        };

        match lookup {
            Ok(detail) => {
                self.notice = None;
                self.dispatch_detail(DetailIntent::Open { detail });
                Ok(())
            }
            Err(err) => {
                tracing::warn!(number, "Detail requested for a book that is not in the catalog");
                self.notice = Some(err.user_message().to_string());
                Err(err)
            }
        }
    }

    /// Opens the overlay for the selected card, if any.
    pub fn open_selected(&mut self) {
        let Some(number) = self
            .catalog
            .view()
            .and_then(|view| view.selected_book())
            .map(|book| book.number)
        else {
            return;
        };
        // A miss is already logged and surfaced as a notice.
        let _ = self.show_details(number);
    }

    /// Scrolls the overlay down, stopping once the last line is on screen.
    pub fn scroll_detail_down(&mut self) {
        let (Some(detail), Some((cols, rows))) = (self.detail.detail(), self.size) else {
            return;
        };
        let popup = detail_popup(body_rect(Rect::new(0, 0, cols, rows)));
        let max = max_scroll(detail, popup);
        self.dispatch_detail(DetailIntent::ScrollDown { max });
    }

    pub fn close_details(&mut self) {
        self.dispatch_detail(DetailIntent::Close);
    }
}
