use uuid::Uuid;

use crate::error::ErrorUi;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddTaskListState {
    /// An insert is in flight.
    pub is_adding: bool,
    /// The last insert succeeded.
    pub is_added: bool,
    /// Inline marker on the name field.
    pub name_input_error: bool,
    /// Id of the list created by the last successful insert.
    pub task_list_id: Option<Uuid>,
    pub error: Option<ErrorUi>,
}

impl UiState for AddTaskListState {}
