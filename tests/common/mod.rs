//! Shared test utilities.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::{oneshot, watch};
use uuid::Uuid;

use todometer::domain::{
    ChecklistItemState, Task, TaskChecklistItem, TaskDraft, TaskList, TaskState,
};
use todometer::error::ErrorKind;
use todometer::repo::{Store, Subscription, TodoRepository};
use todometer::ui::mvi::UiState;

/// Repository whose writes can be held open or made to fail.
///
/// Reads always go straight to the wrapped in-memory [`Store`].
pub struct GatedRepo {
    inner: Store,
    gate: Mutex<Option<oneshot::Receiver<()>>>,
    failure: Mutex<Option<ErrorKind>>,
    writes: AtomicUsize,
}

impl GatedRepo {
    pub fn new() -> Self {
        Self {
            inner: Store::in_memory(),
            gate: Mutex::new(None),
            failure: Mutex::new(None),
            writes: AtomicUsize::new(0),
        }
    }

    /// Block the next write until the returned sender fires (or is dropped).
    pub fn hold_next(&self) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        *self.gate.lock() = Some(gate);
        release
    }

    /// Make every following write fail with `kind`.
    pub fn fail_with(&self, kind: ErrorKind) {
        *self.failure.lock() = Some(kind);
    }

    /// Let writes succeed again.
    pub fn recover(&self) {
        *self.failure.lock() = None;
    }

    pub fn write_calls(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn store(&self) -> &Store {
        &self.inner
    }

    async fn gate(&self) -> Result<(), ErrorKind> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let gate = self.gate.lock().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        let failure = self.failure.lock().clone();
        match failure {
            Some(kind) => Err(kind),
            None => Ok(()),
        }
    }
}

impl TodoRepository for GatedRepo {
    async fn insert_task_list(&self, name: String) -> Result<Uuid, ErrorKind> {
        self.gate().await?;
        self.inner.insert_task_list(name).await
    }

    async fn insert_task_list_selected(&self, name: String) -> Result<Uuid, ErrorKind> {
        self.gate().await?;
        self.inner.insert_task_list_selected(name).await
    }

    async fn update_task_list_name(&self, id: Uuid, name: String) -> Result<(), ErrorKind> {
        self.gate().await?;
        self.inner.update_task_list_name(id, name).await
    }

    async fn delete_task_list(&self, id: Uuid) -> Result<(), ErrorKind> {
        self.gate().await?;
        self.inner.delete_task_list(id).await
    }

    fn task_lists(&self) -> Subscription<Vec<TaskList>> {
        self.inner.task_lists()
    }

    async fn selected_task_list_id(&self) -> Result<Option<Uuid>, ErrorKind> {
        self.inner.selected_task_list_id().await
    }

    async fn set_selected_task_list(&self, id: Option<Uuid>) -> Result<(), ErrorKind> {
        self.gate().await?;
        self.inner.set_selected_task_list(id).await
    }

    fn selected_task_list(&self) -> Subscription<Option<TaskList>> {
        self.inner.selected_task_list()
    }

    async fn insert_task(
        &self,
        draft: TaskDraft,
        task_list_id: Option<Uuid>,
    ) -> Result<Uuid, ErrorKind> {
        self.gate().await?;
        self.inner.insert_task(draft, task_list_id).await
    }

    async fn insert_task_with_checklist(
        &self,
        draft: TaskDraft,
        task_list_id: Option<Uuid>,
        checklist: Vec<String>,
    ) -> Result<Uuid, ErrorKind> {
        self.gate().await?;
        self.inner
            .insert_task_with_checklist(draft, task_list_id, checklist)
            .await
    }

    async fn update_task(&self, id: Uuid, draft: TaskDraft) -> Result<(), ErrorKind> {
        self.gate().await?;
        self.inner.update_task(id, draft).await
    }

    async fn set_task_state(&self, id: Uuid, state: TaskState) -> Result<(), ErrorKind> {
        self.gate().await?;
        self.inner.set_task_state(id, state).await
    }

    async fn delete_task(&self, id: Uuid) -> Result<(), ErrorKind> {
        self.gate().await?;
        self.inner.delete_task(id).await
    }

    fn task(&self, id: Uuid) -> Subscription<Task> {
        self.inner.task(id)
    }

    fn selected_tasks(&self) -> Subscription<Vec<Task>> {
        self.inner.selected_tasks()
    }

    async fn insert_checklist_items(
        &self,
        task_id: Uuid,
        texts: Vec<String>,
    ) -> Result<Vec<Uuid>, ErrorKind> {
        self.gate().await?;
        self.inner.insert_checklist_items(task_id, texts).await
    }

    async fn set_checklist_item_state(
        &self,
        id: Uuid,
        state: ChecklistItemState,
    ) -> Result<(), ErrorKind> {
        self.gate().await?;
        self.inner.set_checklist_item_state(id, state).await
    }

    async fn delete_checklist_item(&self, id: Uuid) -> Result<(), ErrorKind> {
        self.gate().await?;
        self.inner.delete_checklist_item(id).await
    }

    fn checklist_items(&self, task_id: Uuid) -> Subscription<Vec<TaskChecklistItem>> {
        self.inner.checklist_items(task_id)
    }
}

/// Wait (bounded) until `done` holds for the published state.
pub async fn wait_until<S: UiState>(
    rx: &mut watch::Receiver<S>,
    done: impl FnMut(&S) -> bool,
) -> S {
    tokio::time::timeout(Duration::from_secs(5), rx.wait_for(done))
        .await
        .expect("state did not settle in time")
        .expect("state container dropped")
        .clone()
}
