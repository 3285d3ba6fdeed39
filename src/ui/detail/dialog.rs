use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::detail::state::DetailDialogState;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};
use crate::view::BookDetail;

/// Popup rect inside the body area.
pub fn detail_popup(area: Rect) -> Rect {
    centered_rect(70, 80, area)
}

/// Largest scroll offset that still leaves content in view: wrapped
/// content height minus the rows inside the popup border.
pub fn max_scroll(detail: &BookDetail, popup: Rect) -> u16 {
    let width = popup.width.saturating_sub(2) as usize;
    let height = popup.height.saturating_sub(2) as usize;
    let total: usize = plain_lines(detail)
        .iter()
        .map(|line| wrapped_height(line, width))
        .sum();
    u16::try_from(total.saturating_sub(height)).unwrap_or(u16::MAX)
}

/// Overlay body as plain text, one entry per source line.
fn plain_lines(detail: &BookDetail) -> Vec<String> {
    let mut lines: Vec<String> = detail
        .fields()
        .into_iter()
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect();
    lines.push(String::new());
    lines.extend(detail.description.lines().map(str::to_string));
    lines
}

/// Rows `line` takes when word-wrapped to `width` columns.
fn wrapped_height(line: &str, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    let mut rows = 1;
    let mut used = 0;
    for word in line.split(' ') {
        let len = word.chars().count();
        if used > 0 && used + 1 + len <= width {
            used += 1 + len;
            continue;
        }
        if used == 0 && len <= width {
            used = len;
            continue;
        }
        if used > 0 {
            rows += 1;
        }
        // Words wider than a row are broken across rows.
        rows += len.saturating_sub(1) / width;
        used = match len % width {
            0 if len > 0 => width,
            rem => rem,
        };
    }
    rows
}

pub fn render_detail_dialog(frame: &mut Frame<'_>, area: Rect, state: &DetailDialogState) {
    let DetailDialogState::Visible { detail, scroll } = state else {
        return;
    };

    let label = Style::default().fg(MUTED_TEXT);
    let text = Style::default().fg(HEADER_TEXT);

    let mut lines: Vec<Line> = detail
        .fields()
        .into_iter()
        .map(|(name, value)| {
            Line::from(vec![
                Span::styled(format!("{}: ", name), label),
                Span::styled(value.to_string(), text),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.extend(
        detail
            .description
            .lines()
            .map(|paragraph| Line::from(Span::styled(paragraph.to_string(), text))),
    );

    let popup = detail_popup(area);
    let scroll = (*scroll).min(max_scroll(detail, popup));
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", detail.title),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(" Up/Down: scroll  Esc: close ").right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(block);
    frame.render_widget(widget, popup);
}
