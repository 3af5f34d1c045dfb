use crate::domain::TaskList;
use crate::error::ErrorUi;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq)]
pub struct EditTaskListState {
    pub is_loading: bool,
    /// `None` while loading or when the default list is selected.
    pub task_list: Option<TaskList>,
    pub is_saving: bool,
    pub is_saved: bool,
    pub name_input_error: bool,
    pub error: Option<ErrorUi>,
}

impl Default for EditTaskListState {
    fn default() -> Self {
        Self {
            is_loading: true,
            task_list: None,
            is_saving: false,
            is_saved: false,
            name_input_error: false,
            error: None,
        }
    }
}

impl UiState for EditTaskListState {}
