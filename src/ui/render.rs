use crate::ui::app::App;
use crate::ui::cards::render_card_grid;
use crate::ui::catalog::CatalogState;
use crate::ui::detail::render_detail_dialog;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

pub const LOADING_TEXT: &str = "Loading books";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.catalog(), app.focus()).widget(), header);
    frame.render_widget(Clear, body);
    draw_body(frame, body, app);
    frame.render_widget(
        Footer::new(app.focus(), app.detail().is_visible(), app.notice()).widget(),
        footer,
    );

    render_detail_dialog(frame, body, app.detail());
}

fn draw_body(frame: &mut Frame<'_>, body: Rect, app: &App) {
    match app.catalog() {
        CatalogState::Loading => {
            let dots = ".".repeat((app.ticks() % 4) as usize);
            let text = Paragraph::new(Line::from(Span::styled(
                format!("{}{}", LOADING_TEXT, dots),
                Style::default().fg(MUTED_TEXT),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(text, body);
        }
        // Only the message; no cards.
        CatalogState::Failed { message } => {
            let text = Paragraph::new(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(STATUS_ERROR),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(text, body);
        }
        CatalogState::Ready(view) => render_card_grid(frame, body, view, app.display()),
    }
}
