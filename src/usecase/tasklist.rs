use uuid::Uuid;

use super::logged;
use crate::domain::TaskList;
use crate::error::ErrorKind;
use crate::repo::{Subscription, TodoRepository};

/// Create a list and select it.
pub async fn insert_task_list<R: TodoRepository>(repo: &R, name: &str) -> Result<Uuid, ErrorKind> {
    logged(
        "insert_task_list",
        repo.insert_task_list_selected(name.trim().to_string()).await,
    )
}

/// Rename the selected list. The default list cannot be renamed.
pub async fn update_task_list_selected_name<R: TodoRepository>(
    repo: &R,
    name: &str,
) -> Result<(), ErrorKind> {
    let result = async {
        let id = repo
            .selected_task_list_id()
            .await?
            .ok_or(ErrorKind::NotFound)?;
        repo.update_task_list_name(id, name.trim().to_string()).await
    }
    .await;
    logged("update_task_list_name", result)
}

/// Delete the selected list with all of its tasks. The selection falls back
/// to the default list in the same commit.
pub async fn delete_task_list_selected<R: TodoRepository>(repo: &R) -> Result<(), ErrorKind> {
    let result = async {
        let id = repo
            .selected_task_list_id()
            .await?
            .ok_or(ErrorKind::NotFound)?;
        repo.delete_task_list(id).await
    }
    .await;
    logged("delete_task_list_selected", result)
}

/// `None` selects the default list.
pub async fn set_task_list_selected<R: TodoRepository>(
    repo: &R,
    id: Option<Uuid>,
) -> Result<(), ErrorKind> {
    logged("set_task_list_selected", repo.set_selected_task_list(id).await)
}

pub fn get_task_lists<R: TodoRepository>(repo: &R) -> Subscription<Vec<TaskList>> {
    repo.task_lists()
}

pub fn get_task_list_selected<R: TodoRepository>(repo: &R) -> Subscription<Option<TaskList>> {
    repo.selected_task_list()
}
