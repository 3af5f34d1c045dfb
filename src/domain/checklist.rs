use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistItemState {
    #[default]
    Unchecked,
    Checked,
}

impl ChecklistItemState {
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            Self::Checked
        } else {
            Self::Unchecked
        }
    }
}

/// Sub-item of a task's checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskChecklistItem {
    pub id: Uuid,
    pub text: String,
    #[serde(default)]
    pub state: ChecklistItemState,
    pub task_id: Uuid,
}

impl TaskChecklistItem {
    pub fn new(task_id: Uuid, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            state: ChecklistItemState::Unchecked,
            task_id,
        }
    }

    pub fn is_checked(&self) -> bool {
        self.state == ChecklistItemState::Checked
    }
}
