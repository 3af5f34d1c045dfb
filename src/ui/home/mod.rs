//! Home screen: task lists, the selected list and its tasks split into
//! doing and done.

mod event;
mod intent;
mod reducer;
mod state;
mod view_model;

pub use event::HomeEvent;
pub use intent::HomeIntent;
pub use reducer::HomeReducer;
pub use state::HomeState;
pub use view_model::HomeViewModel;
