use crate::error::ErrorUi;
use crate::ui::mvi::Reducer;

use super::intent::EditTaskIntent;
use super::state::EditTaskState;

pub struct EditTaskReducer;

impl Reducer for EditTaskReducer {
    type State = EditTaskState;
    type Intent = EditTaskIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditTaskIntent::Loaded { result: Ok(task) } => EditTaskState {
                is_loading: false,
                task: Some(task),
                ..state
            },
            EditTaskIntent::Loaded { result: Err(kind) } => EditTaskState {
                is_loading: false,
                error: Some(ErrorUi::from_kind(&kind)),
                ..state
            },
            EditTaskIntent::TitleRejected => EditTaskState {
                title_input_error: true,
                ..state
            },
            EditTaskIntent::Submitted => EditTaskState {
                is_saving: true,
                title_input_error: false,
                ..state
            },
            EditTaskIntent::Completed { result: Ok(()) } => EditTaskState {
                is_saving: false,
                is_saved: true,
                error: None,
                ..state
            },
            EditTaskIntent::Completed { result: Err(kind) } => EditTaskState {
                is_saving: false,
                error: Some(ErrorUi::from_kind(&kind)),
                ..state
            },
        }
    }
}
