//! Domain model: task lists, tasks and their checklists.
//!
//! These are plain values. Persistence lives in [`crate::repo`] and every
//! mutation goes through a use-case in [`crate::usecase`].

mod checklist;
mod progress;
mod tag;
mod task;
mod task_list;

pub use checklist::{ChecklistItemState, TaskChecklistItem};
pub use progress::{checklist_progress, percentage, sort_tasks, task_progress, TaskOrder};
pub use tag::Tag;
pub use task::{Task, TaskDraft, TaskState};
pub use task_list::TaskList;
