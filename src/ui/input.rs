use crate::ui::app::{App, Focus};
use crate::ui::catalog::CatalogIntent;
use crate::ui::detail::DetailIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.detail().is_visible() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_details(),
            KeyCode::Up | KeyCode::Char('k') => app.dispatch_detail(DetailIntent::ScrollUp),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_detail_down(),
            _ => {}
        }
        return;
    }

    match app.focus() {
        Focus::Search => handle_search_key(app, key),
        Focus::Cards => handle_cards_key(app, key),
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.set_focus(Focus::Cards),
        KeyCode::Backspace => app.dispatch_catalog(CatalogIntent::DeleteChar),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_catalog(CatalogIntent::InsertChar(ch))
        }
        _ => {}
    }
}

fn handle_cards_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('/') => app.set_focus(Focus::Search),
        KeyCode::Char('y') => app.dispatch_catalog(CatalogIntent::NextYear),
        KeyCode::Char('Y') => app.dispatch_catalog(CatalogIntent::PrevYear),
        KeyCode::Char('s') => app.dispatch_catalog(CatalogIntent::NextSort),
        KeyCode::Char('S') => app.dispatch_catalog(CatalogIntent::PrevSort),
        KeyCode::Char('c') => app.dispatch_catalog(CatalogIntent::ClearFilters),
        KeyCode::Left | KeyCode::Char('h') => {
            app.dispatch_catalog(CatalogIntent::Move { delta: -1 })
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.dispatch_catalog(CatalogIntent::Move { delta: 1 })
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_rows(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_rows(1),
        KeyCode::Enter => app.open_selected(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
