//! Base trait for intents (state transitions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Transitions requested by a user event (submit pressed, input rejected)
/// - Completion of a use-case (success or failure)
/// - New snapshots arriving from a repository stream
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
