use crate::error::ErrorUi;
use crate::ui::mvi::Reducer;

use super::intent::EditTaskListIntent;
use super::state::EditTaskListState;

pub struct EditTaskListReducer;

impl Reducer for EditTaskListReducer {
    type State = EditTaskListState;
    type Intent = EditTaskListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditTaskListIntent::Loaded { result: Ok(task_list) } => EditTaskListState {
                is_loading: false,
                task_list,
                ..state
            },
            EditTaskListIntent::Loaded { result: Err(kind) } => EditTaskListState {
                is_loading: false,
                error: Some(ErrorUi::from_kind(&kind)),
                ..state
            },
            EditTaskListIntent::NameRejected => EditTaskListState {
                name_input_error: true,
                ..state
            },
            EditTaskListIntent::Submitted => EditTaskListState {
                is_saving: true,
                name_input_error: false,
                ..state
            },
            EditTaskListIntent::Completed { result: Ok(()) } => EditTaskListState {
                is_saving: false,
                is_saved: true,
                error: None,
                ..state
            },
            EditTaskListIntent::Completed { result: Err(kind) } => EditTaskListState {
                is_saving: false,
                error: Some(ErrorUi::from_kind(&kind)),
                ..state
            },
        }
    }
}
