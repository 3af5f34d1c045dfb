use std::sync::Arc;

use tokio::sync::watch;
use uuid::Uuid;

use crate::domain::TaskDraft;
use crate::repo::TodoRepository;
use crate::ui::mvi::{Reducer, StateContainer, ViewModel};
use crate::usecase::task;

use super::event::EditTaskEvent;
use super::intent::EditTaskIntent;
use super::reducer::EditTaskReducer;
use super::state::EditTaskState;

pub struct EditTaskViewModel<R: TodoRepository> {
    repo: Arc<R>,
    task_id: Uuid,
    container: Arc<StateContainer<EditTaskState>>,
}

impl<R: TodoRepository> EditTaskViewModel<R> {
    /// Starts following task `task_id`. Requires a tokio runtime.
    pub fn new(repo: Arc<R>, task_id: Uuid) -> Self {
        let container = StateContainer::new(EditTaskState::default());
        container.collect(task::get_task(repo.as_ref(), task_id), |state, result| {
            EditTaskReducer::reduce(state, EditTaskIntent::Loaded { result })
        });
        Self {
            repo,
            task_id,
            container,
        }
    }

    fn update_task(&self, draft: TaskDraft) {
        if !draft.has_title() {
            self.container
                .dispatch::<EditTaskReducer>(EditTaskIntent::TitleRejected);
            return;
        }

        self.container.dispatch::<EditTaskReducer>(EditTaskIntent::Submitted);
        let repo = Arc::clone(&self.repo);
        let id = self.task_id;
        self.container.launch(
            async move { task::update_task(repo.as_ref(), id, draft).await },
            |state, result| EditTaskReducer::reduce(state, EditTaskIntent::Completed { result }),
        );
    }
}

impl<R: TodoRepository> ViewModel for EditTaskViewModel<R> {
    type State = EditTaskState;
    type Event = EditTaskEvent;

    fn state(&self) -> EditTaskState {
        self.container.state()
    }

    fn subscribe(&self) -> watch::Receiver<EditTaskState> {
        self.container.subscribe()
    }

    fn handle_event(&self, event: EditTaskEvent) {
        match event {
            EditTaskEvent::UpdateTask { draft } => self.update_task(draft),
        }
    }
}
