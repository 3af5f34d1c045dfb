use std::sync::Arc;

use tokio::sync::watch;
use uuid::Uuid;

use crate::domain::ChecklistItemState;
use crate::repo::TodoRepository;
use crate::ui::mvi::{Reducer, StateContainer, ViewModel};
use crate::usecase::{checklist, task};

use super::event::TaskDetailsEvent;
use super::intent::TaskDetailsIntent;
use super::reducer::TaskDetailsReducer;
use super::state::TaskDetailsState;

pub struct TaskDetailsViewModel<R: TodoRepository> {
    repo: Arc<R>,
    task_id: Uuid,
    container: Arc<StateContainer<TaskDetailsState>>,
}

impl<R: TodoRepository> TaskDetailsViewModel<R> {
    /// Starts following the task and its checklist. Requires a tokio runtime.
    pub fn new(repo: Arc<R>, task_id: Uuid) -> Self {
        let container = StateContainer::new(TaskDetailsState::default());
        container.collect(task::get_task(repo.as_ref(), task_id), |state, result| {
            TaskDetailsReducer::reduce(state, TaskDetailsIntent::TaskLoaded { result })
        });
        container.collect(
            checklist::get_task_checklist_items(repo.as_ref(), task_id),
            |state, result| {
                TaskDetailsReducer::reduce(state, TaskDetailsIntent::ChecklistLoaded { result })
            },
        );
        Self {
            repo,
            task_id,
            container,
        }
    }

    fn set_checklist_item_checked(&self, id: Uuid, checked: bool) {
        self.container
            .dispatch::<TaskDetailsReducer>(TaskDetailsIntent::Submitted);
        let repo = Arc::clone(&self.repo);
        let state = ChecklistItemState::from_checked(checked);
        self.container.launch(
            async move { checklist::set_task_checklist_item_state(repo.as_ref(), id, state).await },
            complete,
        );
    }

    fn insert_checklist_item(&self, text: String) {
        if text.trim().is_empty() {
            return;
        }

        self.container
            .dispatch::<TaskDetailsReducer>(TaskDetailsIntent::Submitted);
        let repo = Arc::clone(&self.repo);
        let task_id = self.task_id;
        self.container.launch(
            async move {
                checklist::insert_task_checklist_items(repo.as_ref(), task_id, vec![text])
                    .await
                    .map(|_| ())
            },
            complete,
        );
    }

    fn delete_checklist_item(&self, id: Uuid) {
        self.container
            .dispatch::<TaskDetailsReducer>(TaskDetailsIntent::Submitted);
        let repo = Arc::clone(&self.repo);
        self.container.launch(
            async move { checklist::delete_task_checklist_item(repo.as_ref(), id).await },
            complete,
        );
    }
}

fn complete(
    state: TaskDetailsState,
    result: Result<(), crate::error::ErrorKind>,
) -> TaskDetailsState {
    TaskDetailsReducer::reduce(state, TaskDetailsIntent::Completed { result })
}

impl<R: TodoRepository> ViewModel for TaskDetailsViewModel<R> {
    type State = TaskDetailsState;
    type Event = TaskDetailsEvent;

    fn state(&self) -> TaskDetailsState {
        self.container.state()
    }

    fn subscribe(&self) -> watch::Receiver<TaskDetailsState> {
        self.container.subscribe()
    }

    fn handle_event(&self, event: TaskDetailsEvent) {
        match event {
            TaskDetailsEvent::SetChecklistItemChecked { id, checked } => {
                self.set_checklist_item_checked(id, checked)
            }
            TaskDetailsEvent::InsertChecklistItem { text } => self.insert_checklist_item(text),
            TaskDetailsEvent::DeleteChecklistItem { id } => self.delete_checklist_item(id),
        }
    }
}
