use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::DetailDialogState;
use crate::ui::mvi::Reducer;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailDialogState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Open { detail } => DetailDialogState::Visible { detail, scroll: 0 },
            DetailIntent::Close => DetailDialogState::Hidden,
            DetailIntent::ScrollUp => match state {
                DetailDialogState::Visible { detail, scroll } => DetailDialogState::Visible {
                    detail,
                    scroll: scroll.saturating_sub(1),
                },
                other => other,
            },
            DetailIntent::ScrollDown { max } => match state {
                DetailDialogState::Visible { detail, scroll } => DetailDialogState::Visible {
                    detail,
                    scroll: scroll.saturating_add(1).min(max),
                },
                other => other,
            },
        }
    }
}
