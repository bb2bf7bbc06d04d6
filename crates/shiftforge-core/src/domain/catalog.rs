//! The complete, immutable problem catalog.

use std::collections::HashSet;

use chrono::NaiveDate;

use super::{Condition, Day, Employee, Horizon, Shift, ShiftCatalog};
use crate::error::{Result, ShiftForgeError};

/// Days, shifts and employees of one scheduling problem.
///
/// Built once and shared read-only: every evaluation and seed generation
/// borrows it, none mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    horizon: Horizon,
    shifts: ShiftCatalog,
    employees: Vec<Employee>,
}

impl Catalog {
    /// Assembles a catalog, assigning employee indices in roster order.
    ///
    /// Rejects an empty roster, duplicate employee ids, shift references
    /// outside the shift catalog and holidays outside the horizon.
    pub fn new(horizon: Horizon, shifts: ShiftCatalog, employees: Vec<Employee>) -> Result<Self> {
        if employees.is_empty() {
            return Err(ShiftForgeError::InvalidCatalog(
                "roster has no employees".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for employee in &employees {
            if !seen.insert(employee.id()) {
                return Err(ShiftForgeError::InvalidCatalog(format!(
                    "duplicate employee id '{}'",
                    employee.id()
                )));
            }

            let gated = employee.skill().flags().map(|(c, _)| c.gates());
            for shift in employee.forbidden_shifts().iter().copied().chain(gated) {
                if shift >= shifts.len() {
                    return Err(ShiftForgeError::InvalidCatalog(format!(
                        "employee '{}' references shift index {} (catalog has {})",
                        employee.id(),
                        shift,
                        shifts.len()
                    )));
                }
            }

            if let Some(date) = employee.holidays().iter().find(|d| !horizon.contains(**d)) {
                return Err(ShiftForgeError::InvalidCatalog(format!(
                    "employee '{}' has holiday {} outside the horizon",
                    employee.id(),
                    date
                )));
            }
        }

        let employees = employees
            .into_iter()
            .enumerate()
            .map(|(index, employee)| employee.with_index(index))
            .collect();

        Ok(Self {
            horizon,
            shifts,
            employees,
        })
    }

    pub fn horizon(&self) -> &Horizon {
        &self.horizon
    }

    pub fn shift_catalog(&self) -> &ShiftCatalog {
        &self.shifts
    }

    pub fn days(&self) -> &[Day] {
        self.horizon.days()
    }

    pub fn shifts(&self) -> &[Shift] {
        self.shifts.shifts()
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    #[inline]
    pub fn n_days(&self) -> usize {
        self.horizon.len()
    }

    #[inline]
    pub fn n_shifts(&self) -> usize {
        self.shifts.len()
    }

    #[inline]
    pub fn n_employees(&self) -> usize {
        self.employees.len()
    }

    /// Number of schedule cells, `n_employees * n_days`.
    #[inline]
    pub fn n_conditions(&self) -> usize {
        self.n_employees() * self.n_days()
    }

    pub fn day(&self, index: usize) -> Result<&Day> {
        self.horizon.day(index)
    }

    pub fn shift(&self, index: usize) -> Result<&Shift> {
        self.shifts.shift(index)
    }

    pub fn employee(&self, index: usize) -> Result<&Employee> {
        self.employees
            .get(index)
            .ok_or(ShiftForgeError::IndexOutOfRange {
                kind: "employee",
                index,
                len: self.employees.len(),
            })
    }

    pub fn day_by_date(&self, date: NaiveDate) -> Result<&Day> {
        self.horizon.day_by_date(date)
    }

    pub fn shift_by_id(&self, id: &str) -> Result<&Shift> {
        self.shifts.by_id(id)
    }

    pub fn employee_by_id(&self, id: &str) -> Result<&Employee> {
        self.employees
            .iter()
            .find(|e| e.id() == id)
            .ok_or_else(|| ShiftForgeError::UnknownId {
                kind: "employee",
                id: id.to_string(),
            })
    }

    /// The rest (OFF) shift.
    pub fn off(&self) -> &Shift {
        self.shifts.off()
    }

    /// Every schedule cell in flat order: employee-major, then day-minor.
    pub fn conditions(&self) -> impl Iterator<Item = Condition> + '_ {
        let n_days = self.n_days();
        (0..self.n_employees())
            .flat_map(move |employee| (0..n_days).map(move |day| Condition::new(employee, day)))
    }

    /// Position of a cell in the flat schedule sequence.
    #[inline]
    pub fn flat_index(&self, condition: Condition) -> usize {
        condition.employee * self.n_days() + condition.day
    }

    /// Inverse of [`flat_index`](Self::flat_index).
    pub fn condition_at(&self, position: usize) -> Result<Condition> {
        if position >= self.n_conditions() {
            return Err(ShiftForgeError::IndexOutOfRange {
                kind: "condition",
                index: position,
                len: self.n_conditions(),
            });
        }
        Ok(Condition::new(
            position / self.n_days(),
            position % self.n_days(),
        ))
    }

    /// Shifts an employee can ever work: the catalog minus OFF, minus
    /// personally forbidden and skill-forbidden shifts. Catalog order.
    pub fn allowed_shifts(&self, employee: &Employee) -> Vec<usize> {
        self.shifts
            .work_shifts()
            .map(Shift::index)
            .filter(|s| !employee.forbidden_shifts().contains(s))
            .filter(|s| !employee.skill().forbids(*s))
            .collect()
    }
}
