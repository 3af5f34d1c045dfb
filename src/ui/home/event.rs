use uuid::Uuid;

use crate::ui::mvi::Event;

#[derive(Debug, Clone)]
pub enum HomeEvent {
    SetTaskDoing { id: Uuid },
    SetTaskDone { id: Uuid },
    DeleteTask { id: Uuid },
    /// Deletes the selected list. Ignored while the default list is selected.
    DeleteTaskList,
    /// `None` selects the default list.
    SelectTaskList { id: Option<Uuid> },
}

impl Event for HomeEvent {}
