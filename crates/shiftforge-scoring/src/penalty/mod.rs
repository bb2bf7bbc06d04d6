//! Penalty vectors and their weighting.

mod weights;


use std::fmt;
use std::ops::{Add, AddAssign};

use shiftforge_core::PenaltyKind;

pub use weights::PenaltyWeights;

/// The seven penalty counts of one schedule, in p1..p7 order.
///
/// Every count is non-negative. Per-employee and per-day slices of a
/// schedule produce partial vectors that add up to the schedule's vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Penalties {
    counts: [u64; PenaltyKind::COUNT],
}

impl Penalties {
    pub const ZERO: Penalties = Penalties {
        counts: [0; PenaltyKind::COUNT],
    };

    pub fn new() -> Self {
        Self::ZERO
    }

    /// Builds a vector from counts in p1..p7 order.
    pub const fn from_array(counts: [u64; PenaltyKind::COUNT]) -> Self {
        Self { counts }
    }

    /// Counts in p1..p7 order.
    pub const fn as_array(&self) -> [u64; PenaltyKind::COUNT] {
        self.counts
    }

    #[inline]
    pub fn get(&self, kind: PenaltyKind) -> u64 {
        self.counts[kind.index()]
    }

    #[inline]
    pub fn set(&mut self, kind: PenaltyKind, count: u64) {
        self.counts[kind.index()] = count;
    }

    #[inline]
    pub fn increment(&mut self, kind: PenaltyKind, count: u64) {
        self.counts[kind.index()] += count;
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, kind: PenaltyKind, count: u64) -> Self {
        self.set(kind, count);
        self
    }

    /// `(kind, count)` pairs in p1..p7 order.
    pub fn iter(&self) -> impl Iterator<Item = (PenaltyKind, u64)> + '_ {
        PenaltyKind::ALL.iter().map(move |&k| (k, self.get(k)))
    }

    /// Unweighted sum of all seven counts.
    pub fn sum(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    pub fn off_on_work_day(&self) -> u64 {
        self.get(PenaltyKind::OffOnWorkDay)
    }

    pub fn skill_violation(&self) -> u64 {
        self.get(PenaltyKind::SkillViolation)
    }

    pub fn shift_on_rest_day(&self) -> u64 {
        self.get(PenaltyKind::ShiftOnRestDay)
    }

    pub fn cycle_uniformity(&self) -> u64 {
        self.get(PenaltyKind::CycleUniformity)
    }

    pub fn transition_violation(&self) -> u64 {
        self.get(PenaltyKind::TransitionViolation)
    }

    pub fn headcount_mismatch(&self) -> u64 {
        self.get(PenaltyKind::HeadcountMismatch)
    }

    pub fn missing_rest(&self) -> u64 {
        self.get(PenaltyKind::MissingRest)
    }
}

impl AddAssign for Penalties {
    fn add_assign(&mut self, other: Self) {
        for (a, b) in self.counts.iter_mut().zip(other.counts) {
            *a += b;
        }
    }
}

impl Add for Penalties {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl std::iter::Sum for Penalties {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Penalties::ZERO, |acc, p| acc + p)
    }
}

impl From<[u64; PenaltyKind::COUNT]> for Penalties {
    fn from(counts: [u64; PenaltyKind::COUNT]) -> Self {
        Self::from_array(counts)
    }
}

impl fmt::Display for Penalties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (kind, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "p{}={}", kind.number(), count)?;
        }
        Ok(())
    }
}
