use crate::domain::{percentage, Task, TaskList};
use crate::error::ErrorUi;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq)]
pub struct HomeState {
    pub is_loading_tasks: bool,
    pub task_lists: Vec<TaskList>,
    /// No selection snapshot has arrived yet.
    pub is_loading_task_list_selected: bool,
    /// `None` while the default list is selected.
    pub task_list_selected: Option<TaskList>,
    pub is_default_task_list_selected: bool,
    pub tasks_doing: Vec<Task>,
    pub tasks_done: Vec<Task>,
    pub is_updating: bool,
    pub error: Option<ErrorUi>,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            is_loading_tasks: true,
            task_lists: Vec::new(),
            is_loading_task_list_selected: true,
            task_list_selected: None,
            is_default_task_list_selected: true,
            tasks_doing: Vec::new(),
            tasks_done: Vec::new(),
            is_updating: false,
            error: None,
        }
    }
}

impl UiState for HomeState {}

impl HomeState {
    /// The loaded selection is the default list, which cannot be deleted.
    pub fn is_default_task_list_confirmed(&self) -> bool {
        !self.is_loading_task_list_selected && self.is_default_task_list_selected
    }

    /// Share of done tasks in the selected list.
    pub fn progress(&self) -> f32 {
        let total = self.tasks_doing.len() + self.tasks_done.len();
        if total == 0 {
            0.0
        } else {
            self.tasks_done.len() as f32 / total as f32
        }
    }

    pub fn percentage(&self) -> String {
        percentage(self.progress())
    }
}
