//! Roster members.

use std::fmt;

use chrono::NaiveDate;

use super::{Day, Skill, WorkCycle};

/// One roster member and their static scheduling attributes.
///
/// Employees are configuration records: built once, placed in a
/// [`Catalog`](super::Catalog) (which assigns the index) and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    index: usize,
    id: String,
    label: String,
    skill: Skill,
    work_cycle: WorkCycle,
    forbidden_shifts: Vec<usize>,
    holidays: Vec<NaiveDate>,
}

impl Employee {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        skill: Skill,
        work_cycle: WorkCycle,
    ) -> Self {
        Self {
            index: 0,
            id: id.into(),
            label: label.into(),
            skill,
            work_cycle,
            forbidden_shifts: Vec::new(),
            holidays: Vec::new(),
        }
    }

    /// Shift indices this employee may never be assigned, regardless of skill.
    pub fn with_forbidden_shifts(mut self, shifts: impl IntoIterator<Item = usize>) -> Self {
        self.forbidden_shifts.extend(shifts);
        self
    }

    pub fn with_holidays(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.holidays.extend(dates);
        self.holidays.sort();
        self.holidays.dedup();
        self
    }

    pub(crate) fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn skill(&self) -> &Skill {
        &self.skill
    }

    #[inline]
    pub fn work_cycle(&self) -> &WorkCycle {
        &self.work_cycle
    }

    /// Personally forbidden shift indices.
    pub fn forbidden_shifts(&self) -> &[usize] {
        &self.forbidden_shifts
    }

    /// Personal holidays, sorted.
    pub fn holidays(&self) -> &[NaiveDate] {
        &self.holidays
    }

    pub fn is_holiday(&self, day: &Day) -> bool {
        self.holidays.binary_search(&day.date()).is_ok()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Employee_id{}", self.id)
    }
}
