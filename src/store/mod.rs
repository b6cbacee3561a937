//! In-memory task store.
//!
//! Active tasks live in a binary min-heap keyed by `(priority, id)`.
//! Completed tasks move to an archive and never re-enter the heap.

mod tasks;

use crate::types::{Priority, Task, TaskId};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Heap element. Ordered by `(priority, id)` only; the task payload does
/// not take part in comparisons.
#[derive(Debug, Clone)]
pub(crate) struct HeapEntry {
    pub priority: Priority,
    pub id: TaskId,
    pub task: Task,
}

impl HeapEntry {
    fn new(task: Task) -> Self {
        Self {
            priority: task.priority,
            id: task.id,
            task,
        }
    }

    fn key(&self) -> (Priority, TaskId) {
        (self.priority, self.id)
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Sole owner of every task in the session.
///
/// Callers receive owned snapshots and mutate only through the
/// identity-keyed operations.
#[derive(Debug, Default)]
pub struct TaskStore {
    heap: BinaryHeap<Reverse<HeapEntry>>,
    completed: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of active tasks.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of tasks completed during this session.
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Hand out the next id. The counter only ever grows.
    fn allocate_id(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Remove the active entry with `id`, re-heapifying the remainder.
    fn take_entry(&mut self, id: TaskId) -> Option<HeapEntry> {
        let mut entries = std::mem::take(&mut self.heap).into_vec();
        let taken = entries
            .iter()
            .position(|Reverse(entry)| entry.id == id)
            .map(|pos| entries.swap_remove(pos).0);
        self.heap = BinaryHeap::from(entries);
        taken
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_entry_orders_by_priority_then_id() {
        let a = HeapEntry::new(Task::new(TaskId(0), "a", 2));
        let b = HeapEntry::new(Task::new(TaskId(1), "b", 1));
        let c = HeapEntry::new(Task::new(TaskId(2), "c", 1));
        assert!(b < c);
        assert!(c < a);
    }

    #[test]
    fn heap_entry_ignores_payload_in_comparisons() {
        let a = HeapEntry::new(Task::new(TaskId(4), "one", 3));
        let b = HeapEntry::new(Task::new(TaskId(4), "two", 3));
        assert_eq!(a, b);
    }

    #[test]
    fn take_entry_keeps_heap_property() {
        let mut store = TaskStore::new();
        for (desc, priority) in [("a", 3), ("b", 1), ("c", 2), ("d", 1)] {
            store.add(desc, priority);
        }
        let taken = store.take_entry(TaskId(1)).expect("entry should exist");
        assert_eq!(taken.task.description, "b");
        assert_eq!(store.len(), 3);

        let Reverse(top) = store.heap.peek().expect("heap should not be empty");
        assert_eq!(top.task.description, "d");
    }

    #[test]
    fn take_entry_missing_leaves_heap_intact() {
        let mut store = TaskStore::new();
        store.add("a", 1);
        assert!(store.take_entry(TaskId(42)).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn ids_are_strictly_increasing() {
        let mut store = TaskStore::new();
        let first = store.allocate_id();
        let second = store.allocate_id();
        assert!(first < second);
    }
}
