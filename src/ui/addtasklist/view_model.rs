use std::sync::Arc;

use tokio::sync::watch;

use crate::repo::TodoRepository;
use crate::ui::mvi::{Reducer, StateContainer, ViewModel};
use crate::usecase::tasklist;

use super::event::AddTaskListEvent;
use super::intent::AddTaskListIntent;
use super::reducer::AddTaskListReducer;
use super::state::AddTaskListState;

pub struct AddTaskListViewModel<R: TodoRepository> {
    repo: Arc<R>,
    container: Arc<StateContainer<AddTaskListState>>,
}

impl<R: TodoRepository> AddTaskListViewModel<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            container: StateContainer::new(AddTaskListState::default()),
        }
    }

    fn insert_task_list(&self, name: String) {
        if name.trim().is_empty() {
            self.container
                .dispatch::<AddTaskListReducer>(AddTaskListIntent::NameRejected);
            return;
        }

        self.container
            .dispatch::<AddTaskListReducer>(AddTaskListIntent::Submitted);
        let repo = Arc::clone(&self.repo);
        self.container.launch(
            async move { tasklist::insert_task_list(repo.as_ref(), &name).await },
            |state, result| {
                AddTaskListReducer::reduce(state, AddTaskListIntent::Completed { result })
            },
        );
    }
}

impl<R: TodoRepository> ViewModel for AddTaskListViewModel<R> {
    type State = AddTaskListState;
    type Event = AddTaskListEvent;

    fn state(&self) -> AddTaskListState {
        self.container.state()
    }

    fn subscribe(&self) -> watch::Receiver<AddTaskListState> {
        self.container.subscribe()
    }

    fn handle_event(&self, event: AddTaskListEvent) {
        match event {
            AddTaskListEvent::InsertTaskList { name } => self.insert_task_list(name),
        }
    }
}
