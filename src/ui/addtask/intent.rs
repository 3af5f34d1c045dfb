use uuid::Uuid;

use crate::error::ErrorKind;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AddTaskIntent {
    TitleRejected,
    ChecklistItemAdded { text: String },
    ChecklistItemRemoved { index: usize },
    Submitted,
    Completed { result: Result<Uuid, ErrorKind> },
}

impl Intent for AddTaskIntent {}
