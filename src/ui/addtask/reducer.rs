use crate::error::ErrorUi;
use crate::ui::mvi::Reducer;

use super::intent::AddTaskIntent;
use super::state::AddTaskState;

pub struct AddTaskReducer;

impl Reducer for AddTaskReducer {
    type State = AddTaskState;
    type Intent = AddTaskIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AddTaskIntent::TitleRejected => AddTaskState {
                title_input_error: true,
                ..state
            },
            AddTaskIntent::ChecklistItemAdded { text } => {
                let mut checklist = state.checklist;
                checklist.push(text);
                AddTaskState { checklist, ..state }
            }
            AddTaskIntent::ChecklistItemRemoved { index } => {
                let mut checklist = state.checklist;
                if index < checklist.len() {
                    checklist.remove(index);
                }
                AddTaskState { checklist, ..state }
            }
            AddTaskIntent::Submitted => AddTaskState {
                is_adding: true,
                title_input_error: false,
                ..state
            },
            // The drafted checklist was stored with the task.
            AddTaskIntent::Completed { result: Ok(id) } => AddTaskState {
                is_adding: false,
                is_added: true,
                task_id: Some(id),
                checklist: Vec::new(),
                error: None,
                ..state
            },
            AddTaskIntent::Completed { result: Err(kind) } => AddTaskState {
                is_adding: false,
                error: Some(ErrorUi::from_kind(&kind)),
                ..state
            },
        }
    }
}
