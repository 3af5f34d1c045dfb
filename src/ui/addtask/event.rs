use crate::domain::TaskDraft;
use crate::ui::mvi::Event;

#[derive(Debug, Clone)]
pub enum AddTaskEvent {
    InsertTask { draft: TaskDraft },
    /// Append an entry to the drafted checklist. Blank text is ignored.
    AddChecklistItem { text: String },
    RemoveChecklistItem { index: usize },
}

impl Event for AddTaskEvent {}
