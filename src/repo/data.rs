use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Task, TaskChecklistItem, TaskList};

/// Everything the store holds. Serialized as-is to the data file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(default)]
    pub task_lists: Vec<TaskList>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub checklist_items: Vec<TaskChecklistItem>,
    #[serde(default)]
    pub selected_task_list: Option<Uuid>,
}

impl StoreData {
    pub fn task_list(&self, id: Uuid) -> Option<&TaskList> {
        self.task_lists.iter().find(|list| list.id == id)
    }

    pub fn task(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Selected list, or `None` for the default list. A selection that no
    /// longer matches any list falls back to the default list.
    pub fn selected_task_list(&self) -> Option<&TaskList> {
        self.selected_task_list.and_then(|id| self.task_list(id))
    }

    pub fn selected_task_list_id(&self) -> Option<Uuid> {
        self.selected_task_list().map(|list| list.id)
    }

    pub fn tasks_in(&self, task_list_id: Option<Uuid>) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.task_list_id == task_list_id)
            .cloned()
            .collect()
    }

    pub fn checklist_of(&self, task_id: Uuid) -> Vec<TaskChecklistItem> {
        self.checklist_items
            .iter()
            .filter(|item| item.task_id == task_id)
            .cloned()
            .collect()
    }

    pub(crate) fn task_mut(&mut self, id: Uuid) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    pub(crate) fn remove_tasks_where(&mut self, predicate: impl Fn(&Task) -> bool) {
        let removed: Vec<Uuid> = self
            .tasks
            .iter()
            .filter(|task| predicate(task))
            .map(|task| task.id)
            .collect();
        self.tasks.retain(|task| !removed.contains(&task.id));
        self.checklist_items
            .retain(|item| !removed.contains(&item.task_id));
    }
}
