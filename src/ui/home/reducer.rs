use crate::domain::{sort_tasks, Task, TaskOrder};
use crate::error::ErrorUi;
use crate::ui::mvi::Reducer;

use super::intent::HomeIntent;
use super::state::HomeState;

pub struct HomeReducer;

impl Reducer for HomeReducer {
    type State = HomeState;
    type Intent = HomeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HomeIntent::TaskListsLoaded { result: Ok(lists) } => HomeState {
                task_lists: lists,
                ..state
            },
            HomeIntent::TaskListSelectedLoaded { result: Ok(list) } => HomeState {
                is_loading_task_list_selected: false,
                is_default_task_list_selected: list.is_none(),
                task_list_selected: list,
                ..state
            },
            HomeIntent::TasksLoaded {
                result: Ok(tasks),
                order,
            } => {
                let (tasks_doing, tasks_done) = partition(tasks, order);
                HomeState {
                    is_loading_tasks: false,
                    tasks_doing,
                    tasks_done,
                    ..state
                }
            }
            HomeIntent::TasksLoaded {
                result: Err(kind), ..
            } => HomeState {
                is_loading_tasks: false,
                error: Some(ErrorUi::from_kind(&kind)),
                ..state
            },
            HomeIntent::TaskListSelectedLoaded { result: Err(kind) } => HomeState {
                is_loading_task_list_selected: false,
                error: Some(ErrorUi::from_kind(&kind)),
                ..state
            },
            HomeIntent::TaskListsLoaded { result: Err(kind) } => HomeState {
                error: Some(ErrorUi::from_kind(&kind)),
                ..state
            },
            HomeIntent::Submitted => HomeState {
                is_updating: true,
                ..state
            },
            HomeIntent::Completed { result: Ok(()) } => HomeState {
                is_updating: false,
                error: None,
                ..state
            },
            HomeIntent::Completed { result: Err(kind) } => HomeState {
                is_updating: false,
                error: Some(ErrorUi::from_kind(&kind)),
                ..state
            },
        }
    }
}

fn partition(tasks: Vec<Task>, order: TaskOrder) -> (Vec<Task>, Vec<Task>) {
    let (mut done, mut doing): (Vec<Task>, Vec<Task>) =
        tasks.into_iter().partition(Task::is_done);
    sort_tasks(&mut doing, order);
    sort_tasks(&mut done, order);
    (doing, done)
}
