//! "Add task" screen.
//!
//! Checklist entries are drafted locally and inserted together with the
//! task on submit.

mod event;
mod intent;
mod reducer;
mod state;
mod view_model;

pub use event::AddTaskEvent;
pub use intent::AddTaskIntent;
pub use reducer::AddTaskReducer;
pub use state::AddTaskState;
pub use view_model::AddTaskViewModel;
