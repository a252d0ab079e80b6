//! Task Store
//!
//! Ordered task collection owned by the root `TodoList`.

use crate::models::{share, SharedTask, TaskRecord};

#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<SharedTask>,
}

impl TaskStore {
    /// Store pre-filled with incomplete tasks
    pub fn seeded<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tasks: texts.into_iter().map(|t| share(TaskRecord::new(t))).collect(),
        }
    }

    /// Append a new incomplete task from raw input.
    /// Returns false when the input is empty after trimming.
    pub fn add(&mut self, raw: &str) -> bool {
        let text = raw.trim();
        if text.is_empty() {
            return false;
        }
        self.tasks.push(share(TaskRecord::new(text)));
        true
    }

    /// Remove every task whose text equals `text`, returning how many went.
    /// Tasks have no identity beyond their text, so duplicates go together.
    pub fn remove_by_text(&mut self, text: &str) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.borrow().text != text);
        before - self.tasks.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SharedTask> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Copy of the current records, in display order
    pub fn snapshot(&self) -> Vec<TaskRecord> {
        self.tasks.iter().map(|task| task.borrow().clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(store: &TaskStore) -> Vec<String> {
        store.snapshot().into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_seeded_tasks_start_incomplete() {
        let store = TaskStore::seeded(["a", "b", "c"]);
        assert_eq!(store.len(), 3);
        assert!(store.snapshot().iter().all(|t| !t.done));
        assert_eq!(texts(&store), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_add_trims_input() {
        let mut store = TaskStore::default();
        assert!(store.add("  Buy milk  "));
        assert_eq!(store.snapshot(), vec![TaskRecord::new("Buy milk")]);
    }

    #[test]
    fn test_add_rejects_blank_input() {
        let mut store = TaskStore::seeded(["a"]);
        assert!(!store.add(""));
        assert!(!store.add("   \t\n"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_by_text_takes_all_duplicates() {
        let mut store = TaskStore::seeded(["milk", "bread", "milk"]);
        assert_eq!(store.remove_by_text("milk"), 2);
        assert_eq!(texts(&store), vec!["bread"]);
        assert_eq!(store.remove_by_text("milk"), 0);
    }

    #[test]
    fn test_shared_record_sees_row_mutation() {
        let store = TaskStore::seeded(["a", "b"]);
        let row_handle = store.iter().nth(1).unwrap().clone();
        row_handle.borrow_mut().done = true;

        let snapshot = store.snapshot();
        assert!(!snapshot[0].done);
        assert!(snapshot[1].done);
    }
}
