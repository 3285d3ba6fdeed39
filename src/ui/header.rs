use crate::ui::app::Focus;
use crate::ui::catalog::CatalogState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Search box, year selector, sort selector and the result count.
pub struct Header<'a> {
    state: &'a CatalogState,
    focus: Focus,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a CatalogState, focus: Focus) -> Self {
        Self { state, focus }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let label_style = Style::default().fg(MUTED_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::styled("  Search: ", label_style)];
        match self.state.view() {
            Some(view) => {
                let search_style = if self.focus == Focus::Search {
                    Style::default().fg(ACCENT).add_modifier(Modifier::UNDERLINED)
                } else {
                    text_style
                };
                let mut search = view.query.search.clone();
                if self.focus == Focus::Search {
                    search.push('_');
                }
                spans.push(Span::styled(search, search_style));
                spans.push(Span::styled("  │  ", separator_style));
                spans.push(Span::styled("Year: ", label_style));
                spans.push(Span::styled(view.year_label(), text_style));
                spans.push(Span::styled("  │  ", separator_style));
                spans.push(Span::styled("Sort: ", label_style));
                spans.push(Span::styled(view.sort_label(), text_style));
                spans.push(Span::styled("  │  ", separator_style));
                spans.push(Span::styled(
                    format!("{} of {} books", view.visible.len(), view.catalog.len()),
                    text_style,
                ));
            }
            // Controls exist but have nothing to act on yet.
            None => {
                spans.push(Span::styled("  │  ", separator_style));
                spans.push(Span::styled("Year: –", label_style));
                spans.push(Span::styled("  │  ", separator_style));
                spans.push(Span::styled("Sort: –", label_style));
            }
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
