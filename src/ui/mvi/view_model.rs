use tokio::sync::watch;

use super::state::UiState;

/// Marker trait for user events.
///
/// Each screen defines a closed enum of events; handlers match on it
/// exhaustively.
pub trait Event: Send + 'static {}

/// A screen's state holder plus its event handler.
pub trait ViewModel {
    type State: UiState;
    type Event: Event;

    /// Copy of the current snapshot.
    fn state(&self) -> Self::State;

    /// Receiver that wakes on every published snapshot.
    fn subscribe(&self) -> watch::Receiver<Self::State>;

    /// Handle one user event.
    ///
    /// Validation happens synchronously; any use-case it triggers runs in
    /// the background and reports back through the state. Must be called
    /// from within a tokio runtime.
    fn handle_event(&self, event: Self::Event);
}
