//! Task records and the score ordering.

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::config::Rounding;
use super::error::HeapError;

/// A task waiting in the heap.
///
/// The score is derived once, at construction, as
/// `rounding(priority / expected_duration)` and is the only ordering key.
/// **Lower scores dequeue first.** There are no setters: a record is only
/// ever moved between storage slots, never edited.
///
/// # Examples
///
/// ```
/// use u_taskqueue::heap::{Rounding, Task};
///
/// let task = Task::new("build", 9.0, 2.0, Rounding::HalfUp).unwrap();
/// assert_eq!(task.score(), 5); // 4.5 rounds up
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "TaskRecord<L>",
        bound(deserialize = "L: Deserialize<'de>")
    )
)]
pub struct Task<L> {
    label: L,
    priority: f64,
    expected_duration: f64,
    score: i64,
}

impl<L> Task<L> {
    /// Creates a task and derives its score.
    ///
    /// Ratios beyond the `i64` range saturate to `i64::MIN` / `i64::MAX`.
    ///
    /// # Errors
    ///
    /// - [`HeapError::NonFinite`] if either input is NaN or infinite.
    /// - [`HeapError::InvalidDuration`] if `expected_duration` is zero.
    pub fn new(
        label: L,
        priority: f64,
        expected_duration: f64,
        rounding: Rounding,
    ) -> Result<Self, HeapError> {
        let score = derive_score(priority, expected_duration, rounding)?;
        Ok(Self {
            label,
            priority,
            expected_duration,
            score,
        })
    }

    /// Returns the task's identity.
    pub fn label(&self) -> &L {
        &self.label
    }

    /// Consumes the record, returning its label.
    pub fn into_label(self) -> L {
        self.label
    }

    /// Returns the caller-supplied priority.
    pub fn priority(&self) -> f64 {
        self.priority
    }

    /// Returns the caller-supplied expected duration.
    pub fn expected_duration(&self) -> f64 {
        self.expected_duration
    }

    /// Returns the derived ordering key.
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Orders two tasks by score alone.
    pub fn cmp_score(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}

/// Validates the inputs and rounds their ratio into a score.
fn derive_score(
    priority: f64,
    expected_duration: f64,
    rounding: Rounding,
) -> Result<i64, HeapError> {
    if !priority.is_finite() {
        return Err(HeapError::NonFinite {
            field: "priority",
            value: priority,
        });
    }
    if !expected_duration.is_finite() {
        return Err(HeapError::NonFinite {
            field: "expected_duration",
            value: expected_duration,
        });
    }
    if expected_duration == 0.0 {
        return Err(HeapError::InvalidDuration);
    }

    // `as` saturates for out-of-range floats.
    Ok(rounding.apply(priority / expected_duration) as i64)
}

/// Wire form of a [`Task`], checked on the way in.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct TaskRecord<L> {
    label: L,
    priority: f64,
    expected_duration: f64,
    score: i64,
}

#[cfg(feature = "serde")]
impl<L> TryFrom<TaskRecord<L>> for Task<L> {
    type Error = HeapError;

    /// Accepts the record only if some [`Rounding`] rule derives its score.
    fn try_from(record: TaskRecord<L>) -> Result<Self, HeapError> {
        let mut matched = false;
        for rounding in Rounding::ALL {
            let score = derive_score(record.priority, record.expected_duration, rounding)?;
            if score == record.score {
                matched = true;
                break;
            }
        }
        if !matched {
            return Err(HeapError::ScoreMismatch {
                score: record.score,
            });
        }

        Ok(Self {
            label: record.label,
            priority: record.priority,
            expected_duration: record.expected_duration,
            score: record.score,
        })
    }
}

/// Signed score difference `score(a) - score(b)`, saturating.
///
/// Negative means `a` dequeues before `b`; zero is a tie.
pub fn compare<L>(a: &Task<L>, b: &Task<L>) -> i64 {
    a.score.saturating_sub(b.score)
}
