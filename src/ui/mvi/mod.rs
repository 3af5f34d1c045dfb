//! Model-View-Intent (MVI) primitives shared by every screen.
//!
//! # Architecture
//!
//! ```text
//! Event ──→ ViewModel ──→ Intent ──→ Reducer ──→ State ──→ observers
//!              │                        ↑
//!              └──→ use-case ──(Result)─┘
//! ```
//!
//! - **State**: immutable snapshot of one screen
//! - **Event**: what the user asked for
//! - **Intent**: a state transition, either caused by an event or by a
//!   use-case completing
//! - **Reducer**: pure function that applies an intent to a state
//! - **StateContainer**: holds the current state and publishes changes

mod container;
mod intent;
mod reducer;
mod state;
mod view_model;

pub use container::StateContainer;
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use view_model::{Event, ViewModel};
