use uuid::Uuid;

use crate::ui::mvi::Event;

#[derive(Debug, Clone)]
pub enum TaskDetailsEvent {
    SetChecklistItemChecked { id: Uuid, checked: bool },
    /// Blank text is ignored.
    InsertChecklistItem { text: String },
    DeleteChecklistItem { id: Uuid },
}

impl Event for TaskDetailsEvent {}
