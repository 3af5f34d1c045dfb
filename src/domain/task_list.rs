use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named collection of tasks.
///
/// The default task list has no row of its own. It is addressed by `None`
/// wherever a task list id is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    pub id: Uuid,
    pub name: String,
}

impl TaskList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}
