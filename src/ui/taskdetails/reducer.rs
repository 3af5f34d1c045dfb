use crate::error::ErrorUi;
use crate::ui::mvi::Reducer;

use super::intent::TaskDetailsIntent;
use super::state::TaskDetailsState;

pub struct TaskDetailsReducer;

impl Reducer for TaskDetailsReducer {
    type State = TaskDetailsState;
    type Intent = TaskDetailsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TaskDetailsIntent::TaskLoaded { result: Ok(task) } => TaskDetailsState {
                is_loading_task: false,
                task: Some(task),
                ..state
            },
            TaskDetailsIntent::TaskLoaded { result: Err(kind) } => TaskDetailsState {
                is_loading_task: false,
                error: Some(ErrorUi::from_kind(&kind)),
                ..state
            },
            TaskDetailsIntent::ChecklistLoaded { result: Ok(items) } => TaskDetailsState {
                is_loading_checklist: false,
                checklist_items: items,
                ..state
            },
            TaskDetailsIntent::ChecklistLoaded { result: Err(kind) } => TaskDetailsState {
                is_loading_checklist: false,
                error: Some(ErrorUi::from_kind(&kind)),
                ..state
            },
            TaskDetailsIntent::Submitted => TaskDetailsState {
                is_updating: true,
                ..state
            },
            TaskDetailsIntent::Completed { result: Ok(()) } => TaskDetailsState {
                is_updating: false,
                error: None,
                ..state
            },
            TaskDetailsIntent::Completed { result: Err(kind) } => TaskDetailsState {
                is_updating: false,
                error: Some(ErrorUi::from_kind(&kind)),
                ..state
            },
        }
    }
}
