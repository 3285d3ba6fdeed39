use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of one card, borders included.
pub const CARD_HEIGHT: u16 = 10;
/// Narrowest a card column may get before dropping a column.
pub const CARD_MIN_WIDTH: u16 = 36;
/// Never more columns than this, however wide the terminal.
pub const MAX_CARD_COLUMNS: u16 = 3;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Number of card columns that fit in `width`.
pub fn grid_columns(width: u16) -> usize {
    (width / CARD_MIN_WIDTH).clamp(1, MAX_CARD_COLUMNS) as usize
}

/// Number of whole card rows that fit in `height` (at least one).
pub fn grid_rows(height: u16) -> usize {
    (height / CARD_HEIGHT).max(1) as usize
}

/// First grid row to draw so that `selected_row` stays on screen.
pub fn first_visible_row(selected_row: usize, visible_rows: usize) -> usize {
    selected_row.saturating_sub(visible_rows.saturating_sub(1))
}

/// Rect of the card at (`row`, `column`) inside `area`, where `row` is
/// relative to the first drawn row.
pub fn card_rect(area: Rect, columns: usize, row: usize, column: usize) -> Rect {
    let columns = columns.max(1) as u16;
    let width = area.width / columns;
    let x = area.x + width * column as u16;
    // Last column absorbs the rounding remainder.
    let width = if column as u16 + 1 == columns {
        area.width - width * column as u16
    } else {
        width
    };
    let y = area.y + CARD_HEIGHT * row as u16;
    let height = area.bottom().saturating_sub(y).min(CARD_HEIGHT);
    Rect {
        x,
        y,
        width,
        height,
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
