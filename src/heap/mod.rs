//! Task priority heap.
//!
//! Tasks carry a base priority and an expected duration. Each is ranked
//! by a score derived once at insertion,
//!
//! ```text
//! score = round(priority / expected_duration)
//! ```
//!
//! and the heap always yields the lowest score first. The rounding rule
//! is explicit ([`Rounding`]) because it decides ties for ratios ending
//! in `.5`.
//!
//! # Removal
//!
//! Tasks can be withdrawn by label. [`RemovalMode::Repair`] keeps the
//! min-heap property; [`RemovalMode::Splice`] shifts the storage tail left
//! without repair, reproducing the storage layout of simple array-splice
//! schedulers at the cost of pop order after the removal.
//!
//! # Concurrency
//!
//! The heap has no interior locking. Share it across threads behind a
//! `Mutex` if needed.

mod config;
mod error;
mod queue;
mod types;

pub use config::{HeapConfig, RemovalMode, Rounding};
pub use error::HeapError;
pub use queue::PriorityHeap;
pub use types::{compare, Task};
