//! Persistence interface consumed by the use-cases.
//!
//! [`TodoRepository`] is the only way use-cases reach stored data. [`Store`]
//! implements it in-process, optionally mirrored to a JSON file.

mod data;
mod file;
mod store;
mod subscription;

use std::future::Future;

use uuid::Uuid;

use crate::domain::{ChecklistItemState, Task, TaskChecklistItem, TaskDraft, TaskList, TaskState};
use crate::error::ErrorKind;

pub use data::StoreData;
pub use file::{DataFile, StoreError};
pub use store::Store;
pub use subscription::Subscription;

/// Read/write access to task lists, tasks and checklist items.
///
/// Writes are one-shot futures. Reads are [`Subscription`]s: an unending
/// sequence of snapshots, one per committed change.
pub trait TodoRepository: Send + Sync + 'static {
    fn insert_task_list(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Uuid, ErrorKind>> + Send;

    /// Create a list and select it in one commit.
    fn insert_task_list_selected(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Uuid, ErrorKind>> + Send;

    fn update_task_list_name(
        &self,
        id: Uuid,
        name: String,
    ) -> impl Future<Output = Result<(), ErrorKind>> + Send;

    /// Delete a list together with its tasks and their checklist items. A
    /// selection pointing at it is reset to the default list.
    fn delete_task_list(&self, id: Uuid) -> impl Future<Output = Result<(), ErrorKind>> + Send;

    fn task_lists(&self) -> Subscription<Vec<TaskList>>;

    /// Currently selected list; `None` is the default list.
    fn selected_task_list_id(
        &self,
    ) -> impl Future<Output = Result<Option<Uuid>, ErrorKind>> + Send;

    fn set_selected_task_list(
        &self,
        id: Option<Uuid>,
    ) -> impl Future<Output = Result<(), ErrorKind>> + Send;

    /// Selected list, resolved. A selection pointing at a deleted list
    /// resolves to the default list (`None`).
    fn selected_task_list(&self) -> Subscription<Option<TaskList>>;

    fn insert_task(
        &self,
        draft: TaskDraft,
        task_list_id: Option<Uuid>,
    ) -> impl Future<Output = Result<Uuid, ErrorKind>> + Send;

    /// Create a task together with its checklist items in one commit.
    fn insert_task_with_checklist(
        &self,
        draft: TaskDraft,
        task_list_id: Option<Uuid>,
        checklist: Vec<String>,
    ) -> impl Future<Output = Result<Uuid, ErrorKind>> + Send;

    fn update_task(
        &self,
        id: Uuid,
        draft: TaskDraft,
    ) -> impl Future<Output = Result<(), ErrorKind>> + Send;

    fn set_task_state(
        &self,
        id: Uuid,
        state: TaskState,
    ) -> impl Future<Output = Result<(), ErrorKind>> + Send;

    /// Delete a task together with its checklist items.
    fn delete_task(&self, id: Uuid) -> impl Future<Output = Result<(), ErrorKind>> + Send;

    fn task(&self, id: Uuid) -> Subscription<Task>;

    /// Tasks of the selected list in insertion order.
    fn selected_tasks(&self) -> Subscription<Vec<Task>>;

    fn insert_checklist_items(
        &self,
        task_id: Uuid,
        texts: Vec<String>,
    ) -> impl Future<Output = Result<Vec<Uuid>, ErrorKind>> + Send;

    fn set_checklist_item_state(
        &self,
        id: Uuid,
        state: ChecklistItemState,
    ) -> impl Future<Output = Result<(), ErrorKind>> + Send;

    fn delete_checklist_item(&self, id: Uuid)
        -> impl Future<Output = Result<(), ErrorKind>> + Send;

    fn checklist_items(&self, task_id: Uuid) -> Subscription<Vec<TaskChecklistItem>>;
}
