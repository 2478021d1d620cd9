//! Priority scheduling of tasks by priority-per-duration score.
//!
//! The crate provides a single component, [`heap::PriorityHeap`], an
//! array-backed binary min-heap over [`heap::Task`] records:
//!
//! - **insert**: score a task and sift it into place.
//! - **pop**: take the lowest-score task.
//! - **remove**: withdraw a task by label.
//!
//! Ordering only. Executing the tasks is up to the caller.
//!
//! Diagnostic events are emitted through `tracing`; install a subscriber
//! in the host application to see them.

pub mod heap;
