use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::TaskOrder;
use crate::error::ErrorKind;
use crate::repo::TodoRepository;
use crate::ui::mvi::{Reducer, StateContainer, ViewModel};
use crate::usecase::{task, tasklist};

use super::event::HomeEvent;
use super::intent::HomeIntent;
use super::reducer::HomeReducer;
use super::state::HomeState;

pub struct HomeViewModel<R: TodoRepository> {
    repo: Arc<R>,
    container: Arc<StateContainer<HomeState>>,
}

impl<R: TodoRepository> HomeViewModel<R> {
    /// Starts following the task lists, the selection and the selected
    /// list's tasks. Requires a tokio runtime.
    pub fn new(repo: Arc<R>, order: TaskOrder) -> Self {
        let container = StateContainer::new(HomeState::default());
        container.collect(tasklist::get_task_lists(repo.as_ref()), |state, result| {
            HomeReducer::reduce(state, HomeIntent::TaskListsLoaded { result })
        });
        container.collect(
            tasklist::get_task_list_selected(repo.as_ref()),
            |state, result| {
                HomeReducer::reduce(state, HomeIntent::TaskListSelectedLoaded { result })
            },
        );
        container.collect(
            task::get_task_list_selected_tasks(repo.as_ref()),
            move |state, result| HomeReducer::reduce(state, HomeIntent::TasksLoaded { result, order }),
        );
        Self { repo, container }
    }

    fn submit<F>(&self, work: impl FnOnce(Arc<R>) -> F)
    where
        F: Future<Output = Result<(), ErrorKind>> + Send + 'static,
    {
        self.container.dispatch::<HomeReducer>(HomeIntent::Submitted);
        self.container
            .launch(work(Arc::clone(&self.repo)), |state, result| {
                HomeReducer::reduce(state, HomeIntent::Completed { result })
            });
    }
}

impl<R: TodoRepository> ViewModel for HomeViewModel<R> {
    type State = HomeState;
    type Event = HomeEvent;

    fn state(&self) -> HomeState {
        self.container.state()
    }

    fn subscribe(&self) -> watch::Receiver<HomeState> {
        self.container.subscribe()
    }

    fn handle_event(&self, event: HomeEvent) {
        match event {
            HomeEvent::SetTaskDoing { id } => self.submit(move |repo| async move {
                task::set_task_doing(repo.as_ref(), id).await
            }),
            HomeEvent::SetTaskDone { id } => self.submit(move |repo| async move {
                task::set_task_done(repo.as_ref(), id).await
            }),
            HomeEvent::DeleteTask { id } => self.submit(move |repo| async move {
                task::delete_task(repo.as_ref(), id).await
            }),
            HomeEvent::DeleteTaskList => {
                if self.container.state().is_default_task_list_confirmed() {
                    tracing::debug!("default task list cannot be deleted, ignoring");
                    return;
                }
                self.submit(|repo| async move {
                    tasklist::delete_task_list_selected(repo.as_ref()).await
                })
            }
            HomeEvent::SelectTaskList { id } => self.submit(move |repo| async move {
                tasklist::set_task_list_selected(repo.as_ref(), id).await
            }),
        }
    }
}
