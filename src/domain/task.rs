use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::tag::Tag;

/// Completion state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    #[default]
    Doing,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub state: TaskState,
    #[serde(default)]
    pub tag: Tag,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// `None` when the task belongs to the default task list.
    #[serde(default)]
    pub task_list_id: Option<Uuid>,
}

impl Task {
    /// Build a new task in `Doing` state from user-entered fields.
    pub fn from_draft(draft: TaskDraft, task_list_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            state: TaskState::Doing,
            tag: draft.tag,
            due_date: draft.due_date,
            task_list_id,
        }
    }

    /// Overwrite the user-editable fields, keeping id, state and list.
    pub fn apply(&mut self, draft: TaskDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.tag = draft.tag;
        self.due_date = draft.due_date;
    }

    pub fn is_done(&self) -> bool {
        self.state == TaskState::Done
    }

    /// A task is overdue when it is still being worked on past its due date.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.is_done() && self.due_date.is_some_and(|due| due < now)
    }
}

/// The user-editable fields of a task, as entered on the add/edit screens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub tag: Tag,
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskDraft {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Title is required; everything else may be empty.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Trim surrounding whitespace from the text fields.
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            ..self
        }
    }
}
