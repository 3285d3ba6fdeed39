//! Card grid for the visible subset.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::config::DisplaySettings;
use crate::ui::catalog::CatalogView;
use crate::ui::layout::{card_rect, first_visible_row, grid_columns, grid_rows};
use crate::ui::theme::{ACCENT, CARD_BORDER, CARD_SELECTED, HEADER_TEXT, MUTED_TEXT};
use crate::view::BookCard;

pub const EMPTY_RESULTS: &str = "No books match";

/// Draws one card per visible book, in order, scrolled so the selected
/// card is on screen.
pub fn render_card_grid(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &CatalogView,
    display: &DisplaySettings,
) {
    if view.visible.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            EMPTY_RESULTS,
            Style::default().fg(MUTED_TEXT),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let columns = grid_columns(area.width);
    let rows = grid_rows(area.height);
    let first_row = first_visible_row(view.selected / columns, rows);

    for (index, book) in view
        .visible
        .iter()
        .enumerate()
        .skip(first_row * columns)
        .take(rows * columns)
    {
        let rect = card_rect(area, columns, index / columns - first_row, index % columns);
        if rect.height == 0 || rect.width == 0 {
            continue;
        }
        let card = BookCard::from_book(book, display);
        frame.render_widget(card_widget(&card, index == view.selected), rect);
    }
}

/// A single bordered card. Description goes last so a short card clips it
/// rather than the metadata.
pub fn card_widget(card: &BookCard, selected: bool) -> Paragraph<'static> {
    let label = Style::default().fg(MUTED_TEXT);
    let text = Style::default().fg(HEADER_TEXT);
    let border = if selected { CARD_SELECTED } else { CARD_BORDER };

    let lines = vec![
        Line::from(Span::styled(
            card.title.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Release date: ", label),
            Span::styled(card.release_date.clone(), text),
        ]),
        Line::from(vec![
            Span::styled("Number of pages: ", label),
            Span::styled(card.pages.clone(), text),
        ]),
        Line::from(vec![
            Span::styled("Genre: ", label),
            Span::styled(card.genre.clone(), text),
        ]),
        Line::from(vec![
            Span::styled("Cover: ", label),
            Span::styled(card.cover.clone(), text),
        ]),
        Line::from(Span::styled(card.description.clone(), text)),
    ];

    let mut block = Block::default()
        .title(format!(" #{} ", card.number))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    if selected {
        block = block.title_bottom(Line::from(" Enter: read more ").right_aligned());
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block)
}
