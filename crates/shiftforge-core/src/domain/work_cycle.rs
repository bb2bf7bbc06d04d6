//! Recurring work/rest cycles.
//!
//! Each employee works `W` consecutive days followed by exactly two rest
//! days, anchored at a per-employee start date. Every cyclic boundary the
//! evaluator and the seed generator use is derived here.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use super::Day;
use crate::error::{Result, ShiftForgeError};

/// Which day closes a cycle window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleBoundary {
    /// The second rest day, right before the cycle restarts.
    WorkToRest,
    /// The first rest day.
    RestToRest,
}

impl CycleBoundary {
    pub const fn as_str(self) -> &'static str {
        match self {
            CycleBoundary::WorkToRest => "work_to_rest",
            CycleBoundary::RestToRest => "rest_to_rest",
        }
    }
}

impl fmt::Display for CycleBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CycleBoundary {
    type Err = ShiftForgeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "work_to_rest" => Ok(CycleBoundary::WorkToRest),
            "rest_to_rest" => Ok(CycleBoundary::RestToRest),
            other => Err(ShiftForgeError::UnknownCycleBoundary(other.to_string())),
        }
    }
}

/// A recurring pattern of `n_work_days` work days and two rest days.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use shiftforge_core::domain::{CycleBoundary, Horizon, WorkCycle};
///
/// let start = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
/// let horizon = Horizon::new(start, 14).unwrap();
/// let cycle = WorkCycle::new(5, start).unwrap();
///
/// let saturday = horizon.day(5).unwrap();
/// assert_eq!(cycle.day_in_cycle(saturday), 5);
/// assert!(cycle.is_rest_day(saturday));
/// assert!(cycle.is_cycle_end(saturday, CycleBoundary::RestToRest));
/// assert!(cycle.is_cycle_end(horizon.day(6).unwrap(), CycleBoundary::WorkToRest));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkCycle {
    n_work_days: u32,
    cycle_start: NaiveDate,
}

impl WorkCycle {
    /// Rest days closing every cycle.
    pub const REST_DAYS: u32 = 2;

    /// Creates a cycle; at least one work day is required.
    pub fn new(n_work_days: u32, cycle_start: NaiveDate) -> Result<Self> {
        if n_work_days == 0 {
            return Err(ShiftForgeError::InvalidCatalog(
                "work cycle needs at least one work day".to_string(),
            ));
        }
        Ok(Self {
            n_work_days,
            cycle_start,
        })
    }

    pub fn n_work_days(&self) -> u32 {
        self.n_work_days
    }

    pub fn n_rest_days(&self) -> u32 {
        Self::REST_DAYS
    }

    /// Cycle length `W + 2`.
    pub fn n_cycle_days(&self) -> u32 {
        self.n_work_days + Self::REST_DAYS
    }

    pub fn cycle_start(&self) -> NaiveDate {
        self.cycle_start
    }

    /// Zero-based offset of `day` within the cycle.
    ///
    /// Days before the cycle start wrap around, so the result is always in
    /// `0..n_cycle_days()`.
    pub fn day_in_cycle(&self, day: &Day) -> u32 {
        self.offset_of(day.date())
    }

    /// Offset of an arbitrary date within the cycle.
    pub fn offset_of(&self, date: NaiveDate) -> u32 {
        let days_since_start = (date - self.cycle_start).num_days();
        days_since_start.rem_euclid(i64::from(self.n_cycle_days())) as u32
    }

    pub fn is_rest_day(&self, day: &Day) -> bool {
        self.day_in_cycle(day) >= self.n_work_days
    }

    pub fn is_work_day(&self, day: &Day) -> bool {
        self.day_in_cycle(day) < self.n_work_days
    }

    /// True when `day` closes a cycle window under `boundary`.
    pub fn is_cycle_end(&self, day: &Day, boundary: CycleBoundary) -> bool {
        let offset = self.day_in_cycle(day);
        match boundary {
            CycleBoundary::WorkToRest => offset == self.n_cycle_days() - 1,
            CycleBoundary::RestToRest => offset == self.n_cycle_days() - 2,
        }
    }
}
