use uuid::Uuid;

use crate::error::ErrorUi;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddTaskState {
    pub is_adding: bool,
    pub is_added: bool,
    pub title_input_error: bool,
    /// Checklist entries drafted before the task exists.
    pub checklist: Vec<String>,
    /// Id of the task created by the last successful insert.
    pub task_id: Option<Uuid>,
    pub error: Option<ErrorUi>,
}

impl UiState for AddTaskState {}
