//! "Edit task list" screen: renames the selected list.

mod event;
mod intent;
mod reducer;
mod state;
mod view_model;

pub use event::EditTaskListEvent;
pub use intent::EditTaskListIntent;
pub use reducer::EditTaskListReducer;
pub use state::EditTaskListState;
pub use view_model::EditTaskListViewModel;
