//! "Edit task" screen.

mod event;
mod intent;
mod reducer;
mod state;
mod view_model;

pub use event::EditTaskEvent;
pub use intent::EditTaskIntent;
pub use reducer::EditTaskReducer;
pub use state::EditTaskState;
pub use view_model::EditTaskViewModel;
