use crate::error::ErrorUi;
use crate::ui::mvi::Reducer;

use super::intent::AddTaskListIntent;
use super::state::AddTaskListState;

pub struct AddTaskListReducer;

impl Reducer for AddTaskListReducer {
    type State = AddTaskListState;
    type Intent = AddTaskListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AddTaskListIntent::NameRejected => AddTaskListState {
                name_input_error: true,
                ..state
            },
            AddTaskListIntent::Submitted => AddTaskListState {
                is_adding: true,
                name_input_error: false,
                ..state
            },
            AddTaskListIntent::Completed { result: Ok(id) } => AddTaskListState {
                is_adding: false,
                is_added: true,
                task_list_id: Some(id),
                error: None,
                ..state
            },
            // Data from the previous success stays as it was.
            AddTaskListIntent::Completed { result: Err(kind) } => AddTaskListState {
                is_adding: false,
                error: Some(ErrorUi::from_kind(&kind)),
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use uuid::Uuid;

    #[test]
    fn submitted_sets_adding_and_clears_field_error() {
        let state = AddTaskListState {
            name_input_error: true,
            ..AddTaskListState::default()
        };
        let new = AddTaskListReducer::reduce(state, AddTaskListIntent::Submitted);
        assert!(new.is_adding);
        assert!(!new.name_input_error);
    }

    #[test]
    fn rejected_name_only_marks_field() {
        let new = AddTaskListReducer::reduce(
            AddTaskListState::default(),
            AddTaskListIntent::NameRejected,
        );
        assert!(new.name_input_error);
        assert!(!new.is_adding);
        assert!(new.error.is_none());
    }

    #[test]
    fn success_clears_adding_and_error() {
        let id = Uuid::new_v4();
        let state = AddTaskListState {
            is_adding: true,
            error: Some(ErrorUi::from_kind(&ErrorKind::Unavailable)),
            ..AddTaskListState::default()
        };
        let new = AddTaskListReducer::reduce(
            state,
            AddTaskListIntent::Completed { result: Ok(id) },
        );
        assert!(!new.is_adding);
        assert!(new.is_added);
        assert_eq!(new.task_list_id, Some(id));
        assert!(new.error.is_none());
    }

    #[test]
    fn failure_maps_error_and_keeps_data() {
        let earlier = Uuid::new_v4();
        let state = AddTaskListState {
            is_adding: true,
            is_added: true,
            task_list_id: Some(earlier),
            ..AddTaskListState::default()
        };
        let new = AddTaskListReducer::reduce(
            state,
            AddTaskListIntent::Completed {
                result: Err(ErrorKind::Storage("disk full".into())),
            },
        );
        assert!(!new.is_adding);
        assert!(new.is_added);
        assert_eq!(new.task_list_id, Some(earlier));
        assert_eq!(
            new.error.map(|e| e.message),
            Some("Changes could not be saved".to_string())
        );
    }
}
