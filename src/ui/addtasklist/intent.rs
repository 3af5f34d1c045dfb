use uuid::Uuid;

use crate::error::ErrorKind;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AddTaskListIntent {
    /// Name was blank; nothing was submitted.
    NameRejected,
    /// Insert started.
    Submitted,
    /// Insert finished.
    Completed { result: Result<Uuid, ErrorKind> },
}

impl Intent for AddTaskListIntent {}
