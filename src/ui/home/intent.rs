use crate::domain::{Task, TaskList, TaskOrder};
use crate::error::ErrorKind;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum HomeIntent {
    TaskListsLoaded {
        result: Result<Vec<TaskList>, ErrorKind>,
    },
    TaskListSelectedLoaded {
        result: Result<Option<TaskList>, ErrorKind>,
    },
    TasksLoaded {
        result: Result<Vec<Task>, ErrorKind>,
        order: TaskOrder,
    },
    Submitted,
    Completed {
        result: Result<(), ErrorKind>,
    },
}

impl Intent for HomeIntent {}
