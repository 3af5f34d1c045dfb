use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use uuid::Uuid;

use super::data::StoreData;
use super::file::{DataFile, StoreError};
use super::subscription::Subscription;
use super::TodoRepository;
use crate::domain::{ChecklistItemState, Task, TaskChecklistItem, TaskDraft, TaskList, TaskState};
use crate::error::ErrorKind;

/// In-process [`TodoRepository`].
///
/// The current data lives in a `watch` channel: every committed change
/// replaces the shared snapshot and wakes all subscriptions. When opened on
/// a [`DataFile`], a change is written to disk before it is published, so a
/// failed write leaves both memory and subscribers untouched.
pub struct Store {
    data: watch::Sender<Arc<StoreData>>,
    file: Option<DataFile>,
    /// Held for the whole of a write, from copying the current data to
    /// publishing the result.
    write_lock: Mutex<()>,
}

impl Store {
    /// A store that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self::from_data(StoreData::default())
    }

    pub fn from_data(data: StoreData) -> Self {
        let (sender, _) = watch::channel(Arc::new(data));
        Self {
            data: sender,
            file: None,
            write_lock: Mutex::new(()),
        }
    }

    /// Load `path` (missing file = empty store) and mirror writes to it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let file = DataFile::new(path);
        let data = file.load()?;
        tracing::debug!(
            path = %file.path().display(),
            task_lists = data.task_lists.len(),
            tasks = data.tasks.len(),
            "store opened"
        );
        let mut store = Self::from_data(data);
        store.file = Some(file);
        Ok(store)
    }

    /// Current contents.
    pub fn snapshot(&self) -> Arc<StoreData> {
        Arc::clone(&self.data.borrow())
    }

    fn subscribe<T, F>(&self, project: F) -> Subscription<T>
    where
        F: Fn(&StoreData) -> Result<T, ErrorKind> + Send + Sync + 'static,
    {
        Subscription::new(self.data.subscribe(), project)
    }

    /// Apply `op` to a copy of the data, persist the copy, then publish it.
    ///
    /// Nothing is published when `op` or the disk write fails.
    async fn write<T>(
        &self,
        op: impl FnOnce(&mut StoreData) -> Result<T, ErrorKind>,
    ) -> Result<T, ErrorKind> {
        let _guard = self.write_lock.lock().await;

        let mut candidate = self.snapshot();
        let value = op(Arc::make_mut(&mut candidate))?;
        self.persist(&candidate).await?;
        self.data.send_replace(candidate);
        Ok(value)
    }

    async fn persist(&self, data: &Arc<StoreData>) -> Result<(), ErrorKind> {
        let Some(file) = &self.file else {
            return Ok(());
        };
        let target = file.clone();
        let data = Arc::clone(data);

        tokio::task::spawn_blocking(move || target.save(&data))
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "store write task failed");
                ErrorKind::Unavailable
            })?
            .map_err(|err| {
                tracing::warn!(error = %err, "store write failed");
                ErrorKind::from(err)
            })
    }
}

fn insert_task_into(
    data: &mut StoreData,
    draft: TaskDraft,
    task_list_id: Option<Uuid>,
) -> Result<Uuid, ErrorKind> {
    if let Some(list_id) = task_list_id {
        if data.task_list(list_id).is_none() {
            return Err(ErrorKind::NotFound);
        }
    }
    let task = Task::from_draft(draft, task_list_id);
    let id = task.id;
    data.tasks.push(task);
    Ok(id)
}

impl TodoRepository for Store {
    async fn insert_task_list(&self, name: String) -> Result<Uuid, ErrorKind> {
        let list = TaskList::new(name);
        let id = list.id;
        self.write(move |data| {
            data.task_lists.push(list);
            Ok(id)
        })
        .await
    }

    async fn insert_task_list_selected(&self, name: String) -> Result<Uuid, ErrorKind> {
        let list = TaskList::new(name);
        let id = list.id;
        self.write(move |data| {
            data.task_lists.push(list);
            data.selected_task_list = Some(id);
            Ok(id)
        })
        .await
    }

    async fn update_task_list_name(&self, id: Uuid, name: String) -> Result<(), ErrorKind> {
        self.write(move |data| {
            let list = data
                .task_lists
                .iter_mut()
                .find(|list| list.id == id)
                .ok_or(ErrorKind::NotFound)?;
            list.name = name;
            Ok(())
        })
        .await
    }

    async fn delete_task_list(&self, id: Uuid) -> Result<(), ErrorKind> {
        self.write(move |data| {
            if data.task_list(id).is_none() {
                return Err(ErrorKind::NotFound);
            }
            data.task_lists.retain(|list| list.id != id);
            data.remove_tasks_where(|task| task.task_list_id == Some(id));
            if data.selected_task_list == Some(id) {
                data.selected_task_list = None;
            }
            Ok(())
        })
        .await
    }

    fn task_lists(&self) -> Subscription<Vec<TaskList>> {
        self.subscribe(|data| Ok(data.task_lists.clone()))
    }

    async fn selected_task_list_id(&self) -> Result<Option<Uuid>, ErrorKind> {
        Ok(self.snapshot().selected_task_list_id())
    }

    async fn set_selected_task_list(&self, id: Option<Uuid>) -> Result<(), ErrorKind> {
        self.write(move |data| {
            if let Some(id) = id {
                if data.task_list(id).is_none() {
                    return Err(ErrorKind::NotFound);
                }
            }
            data.selected_task_list = id;
            Ok(())
        })
        .await
    }

    fn selected_task_list(&self) -> Subscription<Option<TaskList>> {
        self.subscribe(|data| Ok(data.selected_task_list().cloned()))
    }

    async fn insert_task(
        &self,
        draft: TaskDraft,
        task_list_id: Option<Uuid>,
    ) -> Result<Uuid, ErrorKind> {
        self.write(move |data| insert_task_into(data, draft, task_list_id))
            .await
    }

    async fn insert_task_with_checklist(
        &self,
        draft: TaskDraft,
        task_list_id: Option<Uuid>,
        checklist: Vec<String>,
    ) -> Result<Uuid, ErrorKind> {
        self.write(move |data| {
            let id = insert_task_into(data, draft, task_list_id)?;
            data.checklist_items.extend(
                checklist
                    .into_iter()
                    .map(|text| TaskChecklistItem::new(id, text)),
            );
            Ok(id)
        })
        .await
    }

    async fn update_task(&self, id: Uuid, draft: TaskDraft) -> Result<(), ErrorKind> {
        self.write(move |data| {
            data.task_mut(id).ok_or(ErrorKind::NotFound)?.apply(draft);
            Ok(())
        })
        .await
    }

    async fn set_task_state(&self, id: Uuid, state: TaskState) -> Result<(), ErrorKind> {
        self.write(move |data| {
            data.task_mut(id).ok_or(ErrorKind::NotFound)?.state = state;
            Ok(())
        })
        .await
    }

    async fn delete_task(&self, id: Uuid) -> Result<(), ErrorKind> {
        self.write(move |data| {
            if data.task(id).is_none() {
                return Err(ErrorKind::NotFound);
            }
            data.remove_tasks_where(|task| task.id == id);
            Ok(())
        })
        .await
    }

    fn task(&self, id: Uuid) -> Subscription<Task> {
        self.subscribe(move |data| data.task(id).cloned().ok_or(ErrorKind::NotFound))
    }

    fn selected_tasks(&self) -> Subscription<Vec<Task>> {
        self.subscribe(|data| Ok(data.tasks_in(data.selected_task_list_id())))
    }

    async fn insert_checklist_items(
        &self,
        task_id: Uuid,
        texts: Vec<String>,
    ) -> Result<Vec<Uuid>, ErrorKind> {
        self.write(move |data| {
            if data.task(task_id).is_none() {
                return Err(ErrorKind::NotFound);
            }
            let items: Vec<TaskChecklistItem> = texts
                .into_iter()
                .map(|text| TaskChecklistItem::new(task_id, text))
                .collect();
            let ids = items.iter().map(|item| item.id).collect();
            data.checklist_items.extend(items);
            Ok(ids)
        })
        .await
    }

    async fn set_checklist_item_state(
        &self,
        id: Uuid,
        state: ChecklistItemState,
    ) -> Result<(), ErrorKind> {
        self.write(move |data| {
            let item = data
                .checklist_items
                .iter_mut()
                .find(|item| item.id == id)
                .ok_or(ErrorKind::NotFound)?;
            item.state = state;
            Ok(())
        })
        .await
    }

    async fn delete_checklist_item(&self, id: Uuid) -> Result<(), ErrorKind> {
        self.write(move |data| {
            let before = data.checklist_items.len();
            data.checklist_items.retain(|item| item.id != id);
            if data.checklist_items.len() == before {
                return Err(ErrorKind::NotFound);
            }
            Ok(())
        })
        .await
    }

    fn checklist_items(&self, task_id: Uuid) -> Subscription<Vec<TaskChecklistItem>> {
        self.subscribe(move |data| Ok(data.checklist_of(task_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn inserting_twice_creates_two_lists() {
        let store = Store::in_memory();
        let a = store.insert_task_list("Groceries".into()).await.unwrap();
        let b = store.insert_task_list("Groceries".into()).await.unwrap();

        assert_ne!(a, b);
        assert_eq!(store.snapshot().task_lists.len(), 2);
    }

    #[tokio::test]
    async fn failed_write_does_not_notify() {
        let store = Store::in_memory();
        let mut lists = store.task_lists();
        assert_eq!(lists.next().await, Some(Ok(vec![])));

        let err = store
            .update_task_list_name(Uuid::new_v4(), "x".into())
            .await
            .unwrap_err();
        assert_eq!(err, ErrorKind::NotFound);

        let pending = tokio::time::timeout(std::time::Duration::from_millis(50), lists.next()).await;
        assert!(pending.is_err(), "no snapshot should follow a failed write");
    }

    #[tokio::test]
    async fn subscription_yields_current_then_changes() {
        let store = Store::in_memory();
        let mut lists = store.task_lists();

        assert_eq!(lists.next().await.unwrap().unwrap().len(), 0);
        store.insert_task_list("Work".into()).await.unwrap();
        let lists_now = lists.next().await.unwrap().unwrap();
        assert_eq!(lists_now.len(), 1);
        assert_eq!(lists_now[0].name, "Work");
    }

    #[tokio::test]
    async fn subscription_ends_when_store_dropped() {
        let store = Store::in_memory();
        let mut lists = store.task_lists();
        assert!(lists.next().await.is_some());

        drop(store);
        assert!(lists.next().await.is_none());
    }

    #[tokio::test]
    async fn task_stream_reports_not_found_after_delete() {
        let store = Store::in_memory();
        let id = store
            .insert_task(TaskDraft::titled("Call mom"), None)
            .await
            .unwrap();
        let mut task = store.task(id);
        assert_eq!(task.next().await.unwrap().unwrap().title, "Call mom");

        store.delete_task(id).await.unwrap();
        assert_eq!(task.next().await, Some(Err(ErrorKind::NotFound)));
    }

    #[tokio::test]
    async fn insert_task_into_unknown_list_fails() {
        let store = Store::in_memory();
        let err = store
            .insert_task(TaskDraft::titled("x"), Some(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert_eq!(err, ErrorKind::NotFound);
        assert!(store.snapshot().tasks.is_empty());
    }

    #[tokio::test]
    async fn reopened_file_has_same_data() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todometer.json");

        let store = Store::open(&path).unwrap();
        let list = store.insert_task_list("Home".into()).await.unwrap();
        store.set_selected_task_list(Some(list)).await.unwrap();
        let task = store
            .insert_task(TaskDraft::titled("Fix sink"), Some(list))
            .await
            .unwrap();
        store
            .insert_checklist_items(task, vec!["wrench".into()])
            .await
            .unwrap();
        let before = store.snapshot();
        drop(store);

        let reopened = Store::open(&path).unwrap();
        assert_eq!(*reopened.snapshot(), *before);
    }

    #[tokio::test]
    async fn failed_disk_write_leaves_data_and_subscribers_untouched() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();
        let store = Store::open(blocker.join("data.json")).unwrap();
        let mut lists = store.task_lists();
        assert_eq!(lists.next().await, Some(Ok(vec![])));

        let err = store.insert_task_list("x".into()).await.unwrap_err();
        assert!(matches!(err, ErrorKind::Storage(_)));
        assert!(store.snapshot().task_lists.is_empty());

        let pending = tokio::time::timeout(std::time::Duration::from_millis(50), lists.next()).await;
        assert!(pending.is_err(), "a write that never reached disk must not be published");
    }

    #[tokio::test]
    async fn insert_task_list_selected_is_one_change() {
        let store = Store::in_memory();
        let mut selected = store.selected_task_list();
        assert_eq!(selected.next().await, Some(Ok(None)));

        let id = store.insert_task_list_selected("Work".into()).await.unwrap();
        let list = selected.next().await.unwrap().unwrap().unwrap();
        assert_eq!(list.id, id);
        assert_eq!(store.snapshot().selected_task_list_id(), Some(id));
    }

    #[tokio::test]
    async fn task_with_checklist_into_unknown_list_writes_nothing() {
        let store = Store::in_memory();
        let err = store
            .insert_task_with_checklist(
                TaskDraft::titled("x"),
                Some(Uuid::new_v4()),
                vec!["a".into()],
            )
            .await
            .unwrap_err();

        assert_eq!(err, ErrorKind::NotFound);
        let data = store.snapshot();
        assert!(data.tasks.is_empty());
        assert!(data.checklist_items.is_empty());
    }

    #[tokio::test]
    async fn task_with_checklist_lands_together() {
        let store = Store::in_memory();
        let id = store
            .insert_task_with_checklist(
                TaskDraft::titled("Pack"),
                None,
                vec!["socks".into(), "charger".into()],
            )
            .await
            .unwrap();

        let items = store.snapshot().checklist_of(id);
        let texts: Vec<_> = items.iter().map(|item| item.text.as_str()).collect();
        assert_eq!(texts, ["socks", "charger"]);
    }

    #[tokio::test]
    async fn unwritable_path_reports_storage_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();
        // Parent "directory" is a regular file, so the write must fail.
        let store = Store::open(blocker.join("data.json")).unwrap();

        let err = store.insert_task_list("x".into()).await.unwrap_err();
        assert!(matches!(err, ErrorKind::Storage(_)));
    }
}
