//! Heap configuration: score rounding and removal behavior.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rule used to turn `priority / expected_duration` into an integer score.
///
/// The variants differ only for ratios that end in exactly `.5`
/// (and for `Truncate`, for every fractional ratio).
///
/// | ratio | `HalfUp` | `HalfAwayFromZero` | `HalfEven` | `Truncate` |
/// |-------|----------|--------------------|------------|------------|
/// | 0.5   | 1        | 1                  | 0          | 0          |
/// | 1.5   | 2        | 2                  | 2          | 1          |
/// | 2.5   | 3        | 3                  | 2          | 2          |
/// | -0.5  | 0        | -1                 | 0          | 0          |
/// | -1.5  | -1       | -2                 | -2         | -1         |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rounding {
    /// Ties round toward positive infinity.
    #[default]
    HalfUp,

    /// Ties round away from zero (`f64::round`).
    HalfAwayFromZero,

    /// Ties round to the nearest even integer (banker's rounding).
    HalfEven,

    /// Drops the fractional part.
    Truncate,
}

impl Rounding {
    /// Every rounding rule.
    pub const ALL: [Rounding; 4] = [
        Rounding::HalfUp,
        Rounding::HalfAwayFromZero,
        Rounding::HalfEven,
        Rounding::Truncate,
    ];

    /// Rounds `x` to an integral `f64` according to this rule.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Rounding::HalfUp => {
                let floor = x.floor();
                if x - floor >= 0.5 {
                    floor + 1.0
                } else {
                    floor
                }
            }
            Rounding::HalfAwayFromZero => x.round(),
            Rounding::HalfEven => {
                let floor = x.floor();
                let diff = x - floor;
                if diff > 0.5 {
                    floor + 1.0
                } else if diff < 0.5 {
                    floor
                } else if floor % 2.0 == 0.0 {
                    floor
                } else {
                    floor + 1.0
                }
            }
            Rounding::Truncate => x.trunc(),
        }
    }
}

/// How [`PriorityHeap::remove`](super::PriorityHeap::remove) closes the gap
/// left by a removed task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RemovalMode {
    /// Move the last task into the gap and sift it up or down.
    ///
    /// Keeps the min-heap property. O(n) scan + O(log n) repair.
    #[default]
    Repair,

    /// Shift every later task one slot left, without any repair.
    ///
    /// Storage order of the survivors is preserved, but the min-heap
    /// property is no longer guaranteed afterwards, so subsequent pops may
    /// come out of score order. Every remaining task is still popped
    /// exactly once.
    Splice,
}

/// Configuration for a [`PriorityHeap`](super::PriorityHeap).
///
/// # Examples
///
/// ```
/// use u_taskqueue::heap::{HeapConfig, RemovalMode, Rounding};
///
/// let config = HeapConfig::default()
///     .with_rounding(Rounding::HalfEven)
///     .with_removal(RemovalMode::Splice)
///     .with_initial_capacity(64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeapConfig {
    /// Rounding rule applied when deriving scores.
    pub rounding: Rounding,

    /// Gap handling for remove-by-label.
    pub removal: RemovalMode,

    /// Storage slots reserved up front. 0 = grow on demand.
    pub initial_capacity: usize,
}

impl HeapConfig {
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_removal(mut self, removal: RemovalMode) -> Self {
        self.removal = removal;
        self
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HeapConfig::default();
        assert_eq!(config.rounding, Rounding::HalfUp);
        assert_eq!(config.removal, RemovalMode::Repair);
        assert_eq!(config.initial_capacity, 0);
    }

    #[test]
    fn test_builder() {
        let config = HeapConfig::default()
            .with_rounding(Rounding::Truncate)
            .with_removal(RemovalMode::Splice)
            .with_initial_capacity(8);
        assert_eq!(config.rounding, Rounding::Truncate);
        assert_eq!(config.removal, RemovalMode::Splice);
        assert_eq!(config.initial_capacity, 8);
    }

    #[test]
    fn test_half_up() {
        let r = Rounding::HalfUp;
        assert_eq!(r.apply(0.5), 1.0);
        assert_eq!(r.apply(2.5), 3.0);
        assert_eq!(r.apply(-0.5), 0.0);
        assert_eq!(r.apply(-1.5), -1.0);
        assert_eq!(r.apply(1.49), 1.0);
        // largest double below 0.5 must not round up
        assert_eq!(r.apply(0.499_999_999_999_999_94), 0.0);
    }

    #[test]
    fn test_half_away_from_zero() {
        let r = Rounding::HalfAwayFromZero;
        assert_eq!(r.apply(0.5), 1.0);
        assert_eq!(r.apply(-0.5), -1.0);
        assert_eq!(r.apply(-1.5), -2.0);
    }

    #[test]
    fn test_half_even() {
        let r = Rounding::HalfEven;
        assert_eq!(r.apply(0.5), 0.0);
        assert_eq!(r.apply(1.5), 2.0);
        assert_eq!(r.apply(2.5), 2.0);
        assert_eq!(r.apply(-0.5), 0.0);
        assert_eq!(r.apply(-1.5), -2.0);
        assert_eq!(r.apply(2.6), 3.0);
    }

    #[test]
    fn test_truncate() {
        let r = Rounding::Truncate;
        assert_eq!(r.apply(1.9), 1.0);
        assert_eq!(r.apply(-1.9), -1.0);
    }

    #[test]
    fn test_integers_unchanged() {
        for r in Rounding::ALL {
            assert_eq!(r.apply(7.0), 7.0);
            assert_eq!(r.apply(-3.0), -3.0);
        }
    }
}
