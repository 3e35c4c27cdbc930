//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen: `(State, Intent) -> State`.
///
/// Implementations must not perform I/O, read clocks, or generate ids;
/// anything like that is resolved before the intent is built.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
