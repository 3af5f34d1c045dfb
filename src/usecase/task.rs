use uuid::Uuid;

use super::logged;
use crate::domain::{Task, TaskDraft, TaskState};
use crate::error::ErrorKind;
use crate::repo::{Subscription, TodoRepository};

/// Add a task to the selected list, with its initial checklist, as a
/// single write.
///
/// Blank checklist entries are skipped.
pub async fn insert_task_in_task_list_selected<R: TodoRepository>(
    repo: &R,
    draft: TaskDraft,
    checklist: Vec<String>,
) -> Result<Uuid, ErrorKind> {
    let result = async {
        let task_list_id = repo.selected_task_list_id().await?;
        let items: Vec<String> = checklist
            .into_iter()
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();
        repo.insert_task_with_checklist(draft.normalized(), task_list_id, items)
            .await
    }
    .await;
    logged("insert_task", result)
}

pub async fn update_task<R: TodoRepository>(
    repo: &R,
    id: Uuid,
    draft: TaskDraft,
) -> Result<(), ErrorKind> {
    logged("update_task", repo.update_task(id, draft.normalized()).await)
}

pub async fn set_task_doing<R: TodoRepository>(repo: &R, id: Uuid) -> Result<(), ErrorKind> {
    logged("set_task_doing", repo.set_task_state(id, TaskState::Doing).await)
}

pub async fn set_task_done<R: TodoRepository>(repo: &R, id: Uuid) -> Result<(), ErrorKind> {
    logged("set_task_done", repo.set_task_state(id, TaskState::Done).await)
}

pub async fn delete_task<R: TodoRepository>(repo: &R, id: Uuid) -> Result<(), ErrorKind> {
    logged("delete_task", repo.delete_task(id).await)
}

pub fn get_task<R: TodoRepository>(repo: &R, id: Uuid) -> Subscription<Task> {
    repo.task(id)
}

pub fn get_task_list_selected_tasks<R: TodoRepository>(repo: &R) -> Subscription<Vec<Task>> {
    repo.selected_tasks()
}
