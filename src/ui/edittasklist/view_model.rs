use std::sync::Arc;

use tokio::sync::watch;

use crate::repo::TodoRepository;
use crate::ui::mvi::{Reducer, StateContainer, ViewModel};
use crate::usecase::tasklist;

use super::event::EditTaskListEvent;
use super::intent::EditTaskListIntent;
use super::reducer::EditTaskListReducer;
use super::state::EditTaskListState;

pub struct EditTaskListViewModel<R: TodoRepository> {
    repo: Arc<R>,
    container: Arc<StateContainer<EditTaskListState>>,
}

impl<R: TodoRepository> EditTaskListViewModel<R> {
    /// Starts following the selected list. Requires a tokio runtime.
    pub fn new(repo: Arc<R>) -> Self {
        let container = StateContainer::new(EditTaskListState::default());
        container.collect(
            tasklist::get_task_list_selected(repo.as_ref()),
            |state, result| {
                EditTaskListReducer::reduce(state, EditTaskListIntent::Loaded { result })
            },
        );
        Self { repo, container }
    }

    fn update_task_list_name(&self, name: String) {
        if name.trim().is_empty() {
            self.container
                .dispatch::<EditTaskListReducer>(EditTaskListIntent::NameRejected);
            return;
        }

        self.container
            .dispatch::<EditTaskListReducer>(EditTaskListIntent::Submitted);
        let repo = Arc::clone(&self.repo);
        self.container.launch(
            async move { tasklist::update_task_list_selected_name(repo.as_ref(), &name).await },
            |state, result| {
                EditTaskListReducer::reduce(state, EditTaskListIntent::Completed { result })
            },
        );
    }
}

impl<R: TodoRepository> ViewModel for EditTaskListViewModel<R> {
    type State = EditTaskListState;
    type Event = EditTaskListEvent;

    fn state(&self) -> EditTaskListState {
        self.container.state()
    }

    fn subscribe(&self) -> watch::Receiver<EditTaskListState> {
        self.container.subscribe()
    }

    fn handle_event(&self, event: EditTaskListEvent) {
        match event {
            EditTaskListEvent::UpdateTaskListName { name } => self.update_task_list_name(name),
        }
    }
}
