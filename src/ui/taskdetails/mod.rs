//! Task details screen: a task with its checklist.

mod event;
mod intent;
mod reducer;
mod state;
mod view_model;

pub use event::TaskDetailsEvent;
pub use intent::TaskDetailsIntent;
pub use reducer::TaskDetailsReducer;
pub use state::TaskDetailsState;
pub use view_model::TaskDetailsViewModel;
