//! Core types for the task list.

use std::fmt;

/// Task priority as an integer (lower = more important).
/// No range is enforced; negative and duplicate values are allowed.
pub type Priority = i64;

/// Priority used when the user accepts the default at the add prompt.
pub const DEFAULT_PRIORITY: Priority = 1;

/// Stable task identity, assigned at creation and never reused.
///
/// Ids only break priority ties and address mutations; they are never
/// shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A task in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub priority: Priority,
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, description: impl Into<String>, priority: Priority) -> Self {
        Self {
            id,
            description: description.into(),
            priority,
            completed: false,
        }
    }
}

/// One element of an ordered snapshot: `(priority, id, task)`.
///
/// Snapshots are owned copies; later store mutations do not affect them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEntry {
    pub priority: Priority,
    pub id: TaskId,
    pub task: Task,
}

impl TaskEntry {
    pub fn description(&self) -> &str {
        &self.task.description
    }
}

/// A row handed to the table renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    /// 1-based position within one rendered snapshot, when shown.
    pub display_index: Option<usize>,
    pub priority: Priority,
    pub description: String,
}

impl TaskRow {
    /// Build display rows from a snapshot, numbering them 1..N when
    /// `show_indices` is set.
    pub fn from_entries(entries: &[TaskEntry], show_indices: bool) -> Vec<TaskRow> {
        entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| TaskRow {
                display_index: show_indices.then_some(idx + 1),
                priority: entry.priority,
                description: entry.task.description.clone(),
            })
            .collect()
    }
}
