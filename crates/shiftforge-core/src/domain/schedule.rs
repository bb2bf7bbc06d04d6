//! Complete shift assignments.

use super::{Catalog, Condition};
use crate::error::{Result, ShiftForgeError};

/// A total assignment of one shift index to every (employee, day) cell.
///
/// Externally a schedule is a flat sequence ordered employee-major, then
/// day-minor. Construction validates the shape against a catalog; once built
/// the schedule is immutable.
///
/// # Example
///
/// ```
/// use shiftforge_core::domain::{Condition, Schedule};
/// # use shiftforge_core::domain::{Catalog, Employee, Horizon, Shift, ShiftCatalog, Skill, WorkCycle};
/// # let start = chrono::NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
/// # let shifts = ShiftCatalog::new(vec![Shift::new("O", "Off", 0, 9).as_rest(), Shift::new("D", "Day", 1, 2)]).unwrap();
/// # let cycle = WorkCycle::new(5, start).unwrap();
/// # let employees = vec![
/// #     Employee::new("a", "A", Skill::new(), cycle),
/// #     Employee::new("b", "B", Skill::new(), cycle),
/// # ];
/// # let catalog = Catalog::new(Horizon::new(start, 2).unwrap(), shifts, employees).unwrap();
/// // 2 employees x 2 days
/// let schedule = Schedule::from_flat(&catalog, vec![1, 1, 0, 1]).unwrap();
/// assert_eq!(schedule.shift_index(Condition::new(1, 0)), 0);
/// assert_eq!(schedule.row(1), &[0, 1]);
///
/// assert!(Schedule::from_flat(&catalog, vec![1, 1, 0]).is_err());
/// assert!(Schedule::from_flat(&catalog, vec![1, 1, 0, 2]).is_err());
/// assert!(schedule.check_catalog(&catalog).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Schedule {
    n_days: usize,
    n_shifts: usize,
    cells: Vec<usize>,
}

impl Schedule {
    /// Builds a schedule from a flat sequence of shift indices.
    pub fn from_flat(catalog: &Catalog, cells: Vec<usize>) -> Result<Self> {
        let expected = catalog.n_conditions();
        if cells.len() != expected {
            return Err(ShiftForgeError::LengthMismatch {
                expected,
                actual: cells.len(),
            });
        }

        let n_shifts = catalog.n_shifts();
        if let Some((position, &value)) = cells.iter().enumerate().find(|(_, &v)| v >= n_shifts) {
            return Err(ShiftForgeError::InvalidShiftIndex {
                position,
                value,
                n_shifts,
            });
        }

        Ok(Self {
            n_days: catalog.n_days(),
            n_shifts,
            cells,
        })
    }

    /// Checks that this schedule fits `catalog`.
    ///
    /// A schedule validated against one catalog may be handed to another.
    /// It fits when the employee and day counts agree and every cell is a
    /// shift index of `catalog`.
    pub fn check_catalog(&self, catalog: &Catalog) -> Result<()> {
        if self.n_days != catalog.n_days() || self.len() != catalog.n_conditions() {
            return Err(ShiftForgeError::ShapeMismatch {
                expected_employees: catalog.n_employees(),
                expected_days: catalog.n_days(),
                employees: self.n_employees(),
                days: self.n_days,
            });
        }

        let n_shifts = catalog.n_shifts();
        if self.n_shifts > n_shifts {
            if let Some((position, &value)) =
                self.cells.iter().enumerate().find(|(_, &v)| v >= n_shifts)
            {
                return Err(ShiftForgeError::InvalidShiftIndex {
                    position,
                    value,
                    n_shifts,
                });
            }
        }
        Ok(())
    }

    /// Builds a schedule by asking `assign` for every cell in flat order.
    pub fn from_fn(catalog: &Catalog, assign: impl FnMut(Condition) -> usize) -> Result<Self> {
        let cells = catalog.conditions().map(assign).collect();
        Self::from_flat(catalog, cells)
    }

    /// Shift index assigned to a cell.
    #[inline]
    pub fn shift_index(&self, condition: Condition) -> usize {
        self.cells[condition.employee * self.n_days + condition.day]
    }

    /// One employee's assignments in horizon order.
    #[inline]
    pub fn row(&self, employee: usize) -> &[usize] {
        let start = employee * self.n_days;
        &self.cells[start..start + self.n_days]
    }

    /// All rows, employee order.
    pub fn rows(&self) -> impl Iterator<Item = &[usize]> {
        self.cells.chunks(self.n_days)
    }

    /// Every cell with its assignment, in flat order.
    pub fn iter(&self) -> impl Iterator<Item = (Condition, usize)> + '_ {
        let n_days = self.n_days;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &s)| (Condition::new(i / n_days, i % n_days), s))
    }

    pub fn n_days(&self) -> usize {
        self.n_days
    }

    pub fn n_employees(&self) -> usize {
        self.cells.len() / self.n_days
    }

    /// Size of the shift catalog the schedule was validated against.
    pub fn n_shifts(&self) -> usize {
        self.n_shifts
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The flat sequence.
    pub fn as_flat(&self) -> &[usize] {
        &self.cells
    }

    pub fn into_flat(self) -> Vec<usize> {
        self.cells
    }
}
