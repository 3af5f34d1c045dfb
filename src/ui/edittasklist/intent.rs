use crate::domain::TaskList;
use crate::error::ErrorKind;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum EditTaskListIntent {
    /// New snapshot of the selected list (`None` = default list).
    Loaded {
        result: Result<Option<TaskList>, ErrorKind>,
    },
    NameRejected,
    Submitted,
    Completed { result: Result<(), ErrorKind> },
}

impl Intent for EditTaskListIntent {}
