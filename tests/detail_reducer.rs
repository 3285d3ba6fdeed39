use bookcase::catalog::Book;
use bookcase::config::DisplaySettings;
use bookcase::ui::detail::{DetailDialogState, DetailIntent, DetailReducer};
use bookcase::ui::mvi::Reducer;
use bookcase::view::BookDetail;

fn detail() -> BookDetail {
    BookDetail::from_book(
        &Book::new(1, "Book A").with_description("Long story"),
        &DisplaySettings::default(),
    )
}

fn open() -> DetailDialogState {
    DetailReducer::reduce(DetailDialogState::Hidden, DetailIntent::Open { detail: detail() })
}

#[test]
fn open_shows_detail_at_top() {
    let state = open();
    assert!(state.is_visible());
    assert_eq!(state.detail().map(|d| d.title.as_str()), Some("Book A"));
    assert!(matches!(state, DetailDialogState::Visible { scroll: 0, .. }));
}

#[test]
fn close_hides() {
    let state = DetailReducer::reduce(open(), DetailIntent::Close);
    assert_eq!(state, DetailDialogState::Hidden);
}

#[test]
fn scroll_saturates_at_top() {
    let state = DetailReducer::reduce(open(), DetailIntent::ScrollUp);
    assert!(matches!(state, DetailDialogState::Visible { scroll: 0, .. }));

    let state = DetailReducer::reduce(state, DetailIntent::ScrollDown { max: 10 });
    let state = DetailReducer::reduce(state, DetailIntent::ScrollDown { max: 10 });
    assert!(matches!(state, DetailDialogState::Visible { scroll: 2, .. }));
}

#[test]
fn scroll_while_hidden_is_noop() {
    let state = DetailReducer::reduce(
        DetailDialogState::Hidden,
        DetailIntent::ScrollDown { max: 10 },
    );
    assert_eq!(state, DetailDialogState::Hidden);
}

#[test]
fn reopen_resets_scroll() {
    let state = DetailReducer::reduce(open(), DetailIntent::ScrollDown { max: 10 });
    let state = DetailReducer::reduce(state, DetailIntent::Open { detail: detail() });
    assert!(matches!(state, DetailDialogState::Visible { scroll: 0, .. }));
}

#[test]
fn scroll_down_stops_at_max() {
    let mut state = open();
    for _ in 0..20 {
        state = DetailReducer::reduce(state, DetailIntent::ScrollDown { max: 3 });
    }
    assert!(matches!(state, DetailDialogState::Visible { scroll: 3, .. }));

    let state = DetailReducer::reduce(state, DetailIntent::ScrollUp);
    assert!(matches!(state, DetailDialogState::Visible { scroll: 2, .. }));
}

#[test]
fn scroll_down_with_nothing_to_scroll_stays_at_top() {
    let state = DetailReducer::reduce(open(), DetailIntent::ScrollDown { max: 0 });
    assert!(matches!(state, DetailDialogState::Visible { scroll: 0, .. }));
}
