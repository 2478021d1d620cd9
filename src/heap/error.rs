//! Errors raised when a task cannot be admitted to the heap.

use thiserror::Error;

/// Reasons a task is rejected, on insert or when deserialized.
///
/// Every variant is detected before the heap is touched, so a failed
/// insert leaves the storage exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum HeapError {
    /// The expected duration was zero, so the score is undefined.
    #[error("expected duration must be non-zero")]
    InvalidDuration,

    /// An input was NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending input.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A stored score that no [`Rounding`](super::Rounding) rule derives
    /// from the record's priority and duration.
    #[error("score {score} does not match priority / expected_duration")]
    ScoreMismatch {
        /// The rejected score.
        score: i64,
    },
}
