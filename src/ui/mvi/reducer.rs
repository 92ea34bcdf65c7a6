use super::intent::Intent;
use super::state::UiState;

/// Owns every transition of one state type.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// (State, Intent) -> State, with no side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
