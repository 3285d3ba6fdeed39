use crate::ui::app::Focus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Key hints for the current focus, followed by the latest notice.
pub struct Footer<'a> {
    focus: Focus,
    detail_open: bool,
    notice: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(focus: Focus, detail_open: bool, notice: Option<&'a str>) -> Self {
        Self {
            focus,
            detail_open,
            notice,
        }
    }

    pub fn hints(&self) -> &'static str {
        if self.detail_open {
            return "Up/Down: scroll  Esc/Enter/q: close";
        }
        match self.focus {
            Focus::Search => "Type to search  Backspace: delete  Enter/Esc: done",
            Focus::Cards => {
                "/: search  y/Y: year  s/S: sort  c: clear  Arrows: move  Enter: details  q: quit"
            }
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let mut spans = vec![Span::styled(
            format!("  {}", self.hints()),
            Style::default().fg(HEADER_TEXT),
        )];
        if let Some(notice) = self.notice {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(
                notice.to_string(),
                Style::default().fg(STATUS_ERROR),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
