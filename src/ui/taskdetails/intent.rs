use crate::domain::{Task, TaskChecklistItem};
use crate::error::ErrorKind;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum TaskDetailsIntent {
    TaskLoaded {
        result: Result<Task, ErrorKind>,
    },
    ChecklistLoaded {
        result: Result<Vec<TaskChecklistItem>, ErrorKind>,
    },
    /// A checklist write started.
    Submitted,
    Completed {
        result: Result<(), ErrorKind>,
    },
}

impl Intent for TaskDetailsIntent {}
