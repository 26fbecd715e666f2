//! Task store keyed by id.
//!
//! [`TaskIndex`] pairs the balanced tree from [`avl`](super::avl) with the
//! `next_id` counter used for automatic id assignment. Ids handed out are
//! never reissued: removing a task, even the one with the highest id, leaves
//! the counter where it is.
//!
//! ```rust
//! use coursework::libs::index::TaskIndex;
//! use coursework::libs::task::{Priority, Task};
//!
//! let mut index = TaskIndex::new();
//! index.insert(Task::new("Read chapter 3", "", "Physics", 90, Priority::High));
//! index.insert(Task::new("Lab report", "", "Physics", 120, Priority::Medium));
//! index.remove(2);
//! assert_eq!(index.next_id(), 3);
//! ```

use super::avl::{self, InOrder, Link};
use super::task::{Task, UNASSIGNED_ID};

#[derive(Debug, Clone)]
pub struct TaskIndex {
    root: Link,
    next_id: u32,
    len: usize,
}

impl Default for TaskIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskIndex {
    pub fn new() -> Self {
        TaskIndex {
            root: None,
            next_id: 1,
            len: 0,
        }
    }

    /// Inserts a task, assigning `next_id` when its id is [`UNASSIGNED_ID`].
    ///
    /// Returns `false` when a task with the same id is already stored; the
    /// stored task is kept and `task` is dropped. `next_id` becomes
    /// `task.id + 1` in both cases.
    pub fn insert(&mut self, mut task: Task) -> bool {
        if task.id == UNASSIGNED_ID && UNASSIGNED_ID < self.next_id {
            task.id = self.next_id;
        }
        let id = task.id;

        let inserted = avl::insert(&mut self.root, task);
        if inserted {
            self.len += 1;
        }
        self.next_id = id.saturating_add(1);

        #[cfg(test)]
        assert!(avl::is_balanced(self.root.as_deref()));
        inserted
    }

    /// Removes and returns the task with `id`. `next_id` is not touched.
    pub fn remove(&mut self, id: u32) -> Option<Task> {
        let removed = avl::delete(&mut self.root, id);
        if removed.is_some() {
            self.len -= 1;
        }

        #[cfg(test)]
        assert!(avl::is_balanced(self.root.as_deref()));
        removed
    }

    pub fn find(&self, id: u32) -> Option<&Task> {
        avl::search(self.root.as_deref(), id).map(|node| node.task())
    }

    pub fn contains(&self, id: u32) -> bool {
        self.find(id).is_some()
    }

    /// Mutable access to the task with `id`.
    ///
    /// The tree is ordered by id, so callers must leave `id` as it is.
    /// [`TaskIndex::update`] restores it after the edit.
    pub fn find_mut(&mut self, id: u32) -> Option<&mut Task> {
        avl::search_mut(&mut self.root, id)
    }

    /// Applies `edit` to the task with `id`. The id itself cannot be changed.
    ///
    /// Returns `false` when no such task exists.
    pub fn update<F>(&mut self, id: u32, edit: F) -> bool
    where
        F: FnOnce(&mut Task),
    {
        match self.find_mut(id) {
            Some(task) => {
                edit(task);
                task.id = id;
                true
            }
            None => false,
        }
    }

    /// Calls `visit` once per task in ascending id order.
    pub fn in_order_traverse<F>(&self, mut visit: F)
    where
        F: FnMut(&Task),
    {
        avl::for_each_in_order(self.root.as_deref(), &mut visit);
    }

    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(self.root.as_deref())
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn height(&self) -> i32 {
        avl::height(self.root.as_deref())
    }

    pub fn is_balanced(&self) -> bool {
        avl::is_balanced(self.root.as_deref())
    }
}

impl<'a> IntoIterator for &'a TaskIndex {
    type Item = &'a Task;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Task> for TaskIndex {
    fn extend<I: IntoIterator<Item = Task>>(&mut self, iter: I) {
        for task in iter {
            self.insert(task);
        }
    }
}

impl FromIterator<Task> for TaskIndex {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        let mut index = TaskIndex::new();
        index.extend(iter);
        index
    }
}
