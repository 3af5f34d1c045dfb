use crate::domain::{checklist_progress, percentage, Task, TaskChecklistItem};
use crate::error::ErrorUi;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq)]
pub struct TaskDetailsState {
    pub is_loading_task: bool,
    pub task: Option<Task>,
    pub is_loading_checklist: bool,
    pub checklist_items: Vec<TaskChecklistItem>,
    /// A checklist write is in flight.
    pub is_updating: bool,
    pub error: Option<ErrorUi>,
}

impl Default for TaskDetailsState {
    fn default() -> Self {
        Self {
            is_loading_task: true,
            task: None,
            is_loading_checklist: true,
            checklist_items: Vec::new(),
            is_updating: false,
            error: None,
        }
    }
}

impl UiState for TaskDetailsState {}

impl TaskDetailsState {
    pub fn checklist_progress(&self) -> f32 {
        checklist_progress(&self.checklist_items)
    }

    pub fn checklist_percentage(&self) -> String {
        percentage(self.checklist_progress())
    }
}
