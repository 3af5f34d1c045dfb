use crate::ui::mvi::Event;

#[derive(Debug, Clone)]
pub enum AddTaskListEvent {
    InsertTaskList { name: String },
}

impl Event for AddTaskListEvent {}
