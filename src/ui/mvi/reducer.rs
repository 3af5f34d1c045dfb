//! Pure state transitions for a screen.

use super::intent::Intent;
use super::state::UiState;

/// Folds one intent into a screen's state.
///
/// Every screen has exactly one reducer, e.g. `HomeReducer` over
/// `HomeIntent`. View-models never build states by hand: user input,
/// use-case completions and stream snapshots all become intents and go
/// through [`StateContainer::dispatch`](super::StateContainer::dispatch)
/// or the `launch`/`collect` callbacks.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// `(state, intent) -> state` with no side effects, so reducers are
    /// tested without a runtime.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
