use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::TaskDraft;
use crate::repo::TodoRepository;
use crate::ui::mvi::{Reducer, StateContainer, ViewModel};
use crate::usecase::task;

use super::event::AddTaskEvent;
use super::intent::AddTaskIntent;
use super::reducer::AddTaskReducer;
use super::state::AddTaskState;

pub struct AddTaskViewModel<R: TodoRepository> {
    repo: Arc<R>,
    container: Arc<StateContainer<AddTaskState>>,
}

impl<R: TodoRepository> AddTaskViewModel<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            container: StateContainer::new(AddTaskState::default()),
        }
    }

    fn insert_task(&self, draft: TaskDraft) {
        if !draft.has_title() {
            self.container
                .dispatch::<AddTaskReducer>(AddTaskIntent::TitleRejected);
            return;
        }

        let checklist = self.container.state().checklist;
        self.container.dispatch::<AddTaskReducer>(AddTaskIntent::Submitted);
        let repo = Arc::clone(&self.repo);
        self.container.launch(
            async move {
                task::insert_task_in_task_list_selected(repo.as_ref(), draft, checklist).await
            },
            |state, result| AddTaskReducer::reduce(state, AddTaskIntent::Completed { result }),
        );
    }

    fn add_checklist_item(&self, text: String) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.container
            .dispatch::<AddTaskReducer>(AddTaskIntent::ChecklistItemAdded {
                text: text.to_string(),
            });
    }
}

impl<R: TodoRepository> ViewModel for AddTaskViewModel<R> {
    type State = AddTaskState;
    type Event = AddTaskEvent;

    fn state(&self) -> AddTaskState {
        self.container.state()
    }

    fn subscribe(&self) -> watch::Receiver<AddTaskState> {
        self.container.subscribe()
    }

    fn handle_event(&self, event: AddTaskEvent) {
        match event {
            AddTaskEvent::InsertTask { draft } => self.insert_task(draft),
            AddTaskEvent::AddChecklistItem { text } => self.add_checklist_item(text),
            AddTaskEvent::RemoveChecklistItem { index } => self
                .container
                .dispatch::<AddTaskReducer>(AddTaskIntent::ChecklistItemRemoved { index }),
        }
    }
}
