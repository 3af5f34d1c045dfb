use uuid::Uuid;

use super::logged;
use crate::domain::{ChecklistItemState, TaskChecklistItem};
use crate::error::ErrorKind;
use crate::repo::{Subscription, TodoRepository};

pub async fn insert_task_checklist_items<R: TodoRepository>(
    repo: &R,
    task_id: Uuid,
    texts: Vec<String>,
) -> Result<Vec<Uuid>, ErrorKind> {
    let texts = texts
        .into_iter()
        .map(|text| text.trim().to_string())
        .collect();
    logged(
        "insert_task_checklist_items",
        repo.insert_checklist_items(task_id, texts).await,
    )
}

pub async fn set_task_checklist_item_state<R: TodoRepository>(
    repo: &R,
    id: Uuid,
    state: ChecklistItemState,
) -> Result<(), ErrorKind> {
    logged(
        "set_task_checklist_item_state",
        repo.set_checklist_item_state(id, state).await,
    )
}

pub async fn delete_task_checklist_item<R: TodoRepository>(
    repo: &R,
    id: Uuid,
) -> Result<(), ErrorKind> {
    logged(
        "delete_task_checklist_item",
        repo.delete_checklist_item(id).await,
    )
}

pub fn get_task_checklist_items<R: TodoRepository>(
    repo: &R,
    task_id: Uuid,
) -> Subscription<Vec<TaskChecklistItem>> {
    repo.checklist_items(task_id)
}
