use crate::ui::mvi::Event;

#[derive(Debug, Clone)]
pub enum EditTaskListEvent {
    UpdateTaskListName { name: String },
}

impl Event for EditTaskListEvent {}
