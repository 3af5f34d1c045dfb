//! "Add task list" screen.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Saving flag, outcome and field error
//! - `event.rs` - User events (InsertTaskList)
//! - `intent.rs` - Transitions (NameRejected, Submitted, Completed)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `view_model.rs` - Validation and use-case invocation

mod event;
mod intent;
mod reducer;
mod state;
mod view_model;

pub use event::AddTaskListEvent;
pub use intent::AddTaskListIntent;
pub use reducer::AddTaskListReducer;
pub use state::AddTaskListState;
pub use view_model::AddTaskListViewModel;
