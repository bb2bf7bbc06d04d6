//! Per-window shift tallies.
//!
//! The cycle-based rules walk an employee's days and accumulate the shifts
//! seen since the last cycle boundary. A `ShiftTally` is that accumulator:
//! an occurrence count per shift index, cleared whenever a window closes.

use smallvec::{smallvec, SmallVec};

/// Occurrence counts indexed by shift index.
///
/// Catalogs rarely have more than a handful of shifts, so the counts stay
/// inline for up to eight of them.
///
/// # Example
///
/// ```
/// use shiftforge_scoring::ShiftTally;
///
/// let mut tally = ShiftTally::new(4);
/// tally.record(2);
/// tally.record(1);
/// tally.record(2);
///
/// assert_eq!(tally.distinct(), 2);
/// assert_eq!(tally.min_index(), Some(1));
/// assert_eq!(tally.count(2), 2);
///
/// tally.clear();
/// assert!(tally.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftTally {
    counts: SmallVec<[u32; 8]>,
    total: u32,
}

impl ShiftTally {
    /// Creates an empty tally over `n_shifts` shift indices.
    pub fn new(n_shifts: usize) -> Self {
        Self {
            counts: smallvec![0; n_shifts],
            total: 0,
        }
    }

    /// Records one occurrence of `shift`.
    ///
    /// # Panics
    ///
    /// Panics if `shift` is outside the tally's range.
    #[inline]
    pub fn record(&mut self, shift: usize) {
        self.counts[shift] += 1;
        self.total += 1;
    }

    /// Occurrences of `shift`; zero for indices outside the range.
    #[inline]
    pub fn count(&self, shift: usize) -> u32 {
        self.counts.get(shift).copied().unwrap_or(0)
    }

    #[inline]
    pub fn contains(&self, shift: usize) -> bool {
        self.count(shift) > 0
    }

    /// Number of distinct shifts recorded.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Smallest shift index recorded, if any.
    pub fn min_index(&self) -> Option<usize> {
        self.counts.iter().position(|&c| c > 0)
    }

    /// Total occurrences recorded.
    pub fn len(&self) -> u32 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Resets every count, keeping the range.
    pub fn clear(&mut self) {
        self.counts.iter_mut().for_each(|c| *c = 0);
        self.total = 0;
    }
}
