use crate::domain::TaskDraft;
use crate::ui::mvi::Event;

#[derive(Debug, Clone)]
pub enum EditTaskEvent {
    UpdateTask { draft: TaskDraft },
}

impl Event for EditTaskEvent {}
