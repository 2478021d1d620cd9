//! Array-backed binary min-heap of tasks.

use tracing::{debug, trace, warn};

use super::config::{HeapConfig, RemovalMode};
use super::error::HeapError;
use super::types::Task;

/// Binary min-heap keyed by [`Task::score`].
///
/// Storage is a `Vec` holding a complete binary tree: for index `i` the
/// parent is `(i - 1) / 2` and the children are `2i + 1` and `2i + 2`.
/// Every non-root task has a score `>=` its parent's, so the root is
/// always a minimum. Equal scores carry no secondary key.
///
/// # Examples
///
/// ```
/// use u_taskqueue::heap::PriorityHeap;
///
/// let mut heap = PriorityHeap::new();
/// heap.insert("Task 3", 1.0, 2.0).unwrap(); // score 1
/// heap.insert("Task 1", 2.0, 1.0).unwrap(); // score 2
/// heap.insert("Task 2", 3.0, 3.0).unwrap(); // score 1
///
/// assert_eq!(heap.pop(), Some("Task 3"));
/// assert_eq!(heap.pop(), Some("Task 2"));
/// assert_eq!(heap.pop(), Some("Task 1"));
/// assert_eq!(heap.pop(), None);
/// ```
#[derive(Debug, Clone)]
pub struct PriorityHeap<L = String> {
    tasks: Vec<Task<L>>,
    config: HeapConfig,
}

impl<L> PriorityHeap<L> {
    /// Creates an empty heap with the default configuration.
    pub fn new() -> Self {
        Self::with_config(HeapConfig::default())
    }

    /// Creates an empty heap with the given configuration.
    pub fn with_config(config: HeapConfig) -> Self {
        Self {
            tasks: Vec::with_capacity(config.initial_capacity),
            config,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &HeapConfig {
        &self.config
    }

    /// Number of queued tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Read-only view of the storage sequence in heap order.
    pub fn tasks(&self) -> &[Task<L>] {
        &self.tasks
    }

    /// Returns the minimum-score task without removing it.
    pub fn peek(&self) -> Option<&Task<L>> {
        self.tasks.first()
    }

    /// Drops every queued task.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Scores `priority / expected_duration` and queues the task.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError`] for a zero duration or a non-finite input.
    /// The heap is untouched on error.
    ///
    /// # Complexity
    /// O(log n)
    pub fn insert(
        &mut self,
        label: L,
        priority: f64,
        expected_duration: f64,
    ) -> Result<(), HeapError> {
        let task = match Task::new(label, priority, expected_duration, self.config.rounding) {
            Ok(task) => task,
            Err(err) => {
                warn!(%err, priority, expected_duration, "rejected task");
                return Err(err);
            }
        };
        self.push(task);
        Ok(())
    }

    /// Queues an already-scored task.
    ///
    /// The task keeps the score it was built with, even if it was built
    /// with a different rounding rule than this heap's.
    pub fn push(&mut self, task: Task<L>) {
        let score = task.score();
        self.tasks.push(task);
        let index = self.sift_up(self.tasks.len() - 1);
        debug!(score, index, len = self.tasks.len(), "task queued");
    }

    /// Inserts every `(label, priority, expected_duration)` entry in order.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected entry and returns its error; entries
    /// before it stay queued.
    pub fn try_extend<I>(&mut self, entries: I) -> Result<(), HeapError>
    where
        I: IntoIterator<Item = (L, f64, f64)>,
    {
        for (label, priority, expected_duration) in entries {
            self.insert(label, priority, expected_duration)?;
        }
        Ok(())
    }

    /// Removes the minimum-score task and returns its label.
    ///
    /// `None` means the heap is empty.
    ///
    /// # Complexity
    /// O(log n)
    pub fn pop(&mut self) -> Option<L> {
        self.pop_task().map(Task::into_label)
    }

    /// Removes the minimum-score task and returns the whole record.
    pub fn pop_task(&mut self) -> Option<Task<L>> {
        let last = self.tasks.pop()?;
        if self.tasks.is_empty() {
            trace!(score = last.score(), "popped last task");
            return Some(last);
        }

        // Move the last task to the root, hand back the old root.
        let root = std::mem::replace(&mut self.tasks[0], last);
        self.sift_down(0);
        trace!(score = root.score(), len = self.tasks.len(), "popped task");
        Some(root)
    }

    /// Drains the heap in pop order.
    pub fn into_sorted_vec(mut self) -> Vec<Task<L>> {
        let mut out = Vec::with_capacity(self.tasks.len());
        while let Some(task) = self.pop_task() {
            out.push(task);
        }
        out
    }

    /// Checks the min-heap property over the whole storage sequence.
    pub fn is_valid_heap(&self) -> bool {
        (1..self.tasks.len()).all(|i| self.tasks[i].score() >= self.tasks[parent(i)].score())
    }

    /// Moves the task at `index` toward the root while it is strictly
    /// smaller than its parent. Returns its final index.
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let p = parent(index);
            if self.tasks[index].score() >= self.tasks[p].score() {
                break;
            }
            self.tasks.swap(index, p);
            index = p;
        }
        index
    }

    /// Moves the task at `index` toward the leaves while a child is
    /// strictly smaller. The smaller child wins; left wins ties.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.tasks.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.tasks[left].score() < self.tasks[smallest].score() {
                smallest = left;
            }
            if right < len && self.tasks[right].score() < self.tasks[smallest].score() {
                smallest = right;
            }

            if smallest == index {
                return;
            }
            self.tasks.swap(index, smallest);
            index = smallest;
        }
    }

    /// Removes the task at `index`, closing the gap per the removal mode.
    fn remove_at(&mut self, index: usize) -> Task<L> {
        match self.config.removal {
            RemovalMode::Splice => self.tasks.remove(index),
            RemovalMode::Repair => {
                let removed = self.tasks.swap_remove(index);
                if index < self.tasks.len() {
                    // The moved task may belong above or below the gap.
                    let settled = self.sift_up(index);
                    if settled == index {
                        self.sift_down(index);
                    }
                }
                removed
            }
        }
    }
}

impl<L: PartialEq> PriorityHeap<L> {
    /// Removes the first task (in storage order) whose label equals `label`.
    ///
    /// An unknown label is a no-op and returns `None`.
    ///
    /// # Complexity
    /// O(n) scan, then O(log n) repair or O(n) shift depending on
    /// [`RemovalMode`].
    pub fn remove(&mut self, label: &L) -> Option<Task<L>> {
        let Some(index) = self.position(label) else {
            trace!(len = self.tasks.len(), "remove: label not queued");
            return None;
        };
        let removed = self.remove_at(index);
        debug!(
            score = removed.score(),
            index,
            mode = ?self.config.removal,
            len = self.tasks.len(),
            "task removed"
        );
        Some(removed)
    }

    /// Returns `true` if a task with this label is queued.
    pub fn contains(&self, label: &L) -> bool {
        self.position(label).is_some()
    }

    fn position(&self, label: &L) -> Option<usize> {
        self.tasks.iter().position(|t| t.label() == label)
    }
}

impl<L> Default for PriorityHeap<L> {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}
