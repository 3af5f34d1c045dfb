use crate::domain::Task;
use crate::error::ErrorUi;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq)]
pub struct EditTaskState {
    pub is_loading: bool,
    pub task: Option<Task>,
    pub is_saving: bool,
    pub is_saved: bool,
    pub title_input_error: bool,
    pub error: Option<ErrorUi>,
}

impl Default for EditTaskState {
    fn default() -> Self {
        Self {
            is_loading: true,
            task: None,
            is_saving: false,
            is_saved: false,
            title_input_error: false,
            error: None,
        }
    }
}

impl UiState for EditTaskState {}
