use crate::domain::Task;
use crate::error::ErrorKind;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum EditTaskIntent {
    Loaded { result: Result<Task, ErrorKind> },
    TitleRejected,
    Submitted,
    Completed { result: Result<(), ErrorKind> },
}

impl Intent for EditTaskIntent {}
