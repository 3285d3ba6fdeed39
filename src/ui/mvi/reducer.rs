use super::intent::Intent;
use super::state::UiState;

/// Pure state transition: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Must not perform I/O; logging and lookups happen in the caller.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
