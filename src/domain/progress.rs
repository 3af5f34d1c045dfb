//! Progress figures and task ordering shared by the screens.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::checklist::TaskChecklistItem;
use super::task::Task;

/// How tasks are ordered within the doing/done partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskOrder {
    /// Insertion order.
    #[default]
    Created,
    /// Earliest due date first; undated tasks last.
    DueDate,
    /// Case-insensitive title.
    Title,
}

/// Share of done tasks in `[0, 1]`. Empty input has no progress.
pub fn task_progress(tasks: &[Task]) -> f32 {
    ratio(tasks.iter().filter(|task| task.is_done()).count(), tasks.len())
}

/// Share of checked items in `[0, 1]`.
pub fn checklist_progress(items: &[TaskChecklistItem]) -> f32 {
    ratio(items.iter().filter(|item| item.is_checked()).count(), items.len())
}

/// Render a progress value as a whole percentage, e.g. `"67%"`.
pub fn percentage(progress: f32) -> String {
    format!("{}%", (progress.clamp(0.0, 1.0) * 100.0).round() as u32)
}

/// Stable sort, so tasks that compare equal keep insertion order.
pub fn sort_tasks(tasks: &mut [Task], order: TaskOrder) {
    match order {
        TaskOrder::Created => {}
        TaskOrder::DueDate => tasks.sort_by(|a, b| match (a.due_date, b.due_date) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
        TaskOrder::Title => tasks.sort_by_cached_key(|task| task.title.to_lowercase()),
    }
}

fn ratio(part: usize, total: usize) -> f32 {
    if total == 0 {
        0.0
    } else {
        part as f32 / total as f32
    }
}
