//! Task insertion, ordered enumeration, completion and re-prioritisation.

use super::{HeapEntry, TaskStore};
use crate::error::{TaskError, TaskResult};
use crate::types::{Priority, Task, TaskEntry, TaskId};
use std::cmp::Reverse;
use tracing::debug;

impl TaskStore {
    /// Add an active task and return its id.
    ///
    /// `description` must be non-empty; the session layer validates input
    /// before calling. Any priority value is accepted.
    pub fn add(&mut self, description: impl Into<String>, priority: Priority) -> TaskId {
        let description = description.into();
        debug_assert!(!description.is_empty(), "task description must not be empty");

        let id = self.allocate_id();
        let task = Task::new(id, description, priority);
        self.heap.push(Reverse(HeapEntry::new(task)));

        debug!(task_id = id.0, priority, active = self.len(), "Task added");
        id
    }

    /// Snapshot of all active tasks, ascending by `(priority, id)`.
    pub fn active_tasks_ordered(&self) -> Vec<TaskEntry> {
        // The heap holds only active tasks; completion moves them out.
        let mut heap = self.heap.clone();
        let mut ordered = Vec::with_capacity(heap.len());

        while let Some(Reverse(entry)) = heap.pop() {
            ordered.push(TaskEntry {
                priority: entry.priority,
                id: entry.id,
                task: entry.task,
            });
        }

        ordered
    }

    /// Look up an active task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.heap
            .iter()
            .map(|Reverse(entry)| &entry.task)
            .find(|task| task.id == id)
    }

    /// Mark the task completed and drop it from the active ordering.
    ///
    /// Returns the task's description for confirmation.
    pub fn complete_by_identity(&mut self, id: TaskId) -> TaskResult<String> {
        let HeapEntry { mut task, .. } = self.take_entry(id).ok_or(TaskError::NotFound(id))?;

        task.completed = true;
        let description = task.description.clone();
        self.completed.push(task);

        debug!(task_id = id.0, active = self.len(), "Task completed");
        Ok(description)
    }

    /// Move the task to `new_priority`, keeping its id.
    ///
    /// Ties at the new priority resolve by original creation order, not by
    /// when the update happened.
    pub fn update_priority_by_identity(
        &mut self,
        id: TaskId,
        new_priority: Priority,
    ) -> TaskResult<String> {
        let HeapEntry { mut task, priority: old_priority, .. } =
            self.take_entry(id).ok_or(TaskError::NotFound(id))?;

        task.priority = new_priority;
        let description = task.description.clone();
        self.heap.push(Reverse(HeapEntry::new(task)));

        debug!(task_id = id.0, old_priority, new_priority, "Task priority updated");
        Ok(description)
    }
}
