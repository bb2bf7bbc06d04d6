//! The seven schedule rules.
//!
//! Rules 1-5 and 7 depend on a single employee's row; rule 6 depends on a
//! single day's column. Each rule is a pure function over borrowed catalog
//! data.

use shiftforge_core::{
    Catalog, Condition, CycleBoundary, Day, Employee, PenaltyKind, Schedule, ShiftCatalog,
    WorkCycle,
};

use crate::penalty::Penalties;
use crate::window::ShiftTally;

/// Penalties attributable to one employee's row. Headcount stays zero.
pub(crate) fn employee_penalties(catalog: &Catalog, employee: &Employee, row: &[usize]) -> Penalties {
    let days = catalog.days();
    let shifts = catalog.shift_catalog();
    let off = shifts.off_index();

    Penalties::new()
        .with(
            PenaltyKind::OffOnWorkDay,
            off_on_work_day(days, employee.work_cycle(), row, off),
        )
        .with(
            PenaltyKind::SkillViolation,
            skill_violation(days, employee, row),
        )
        .with(
            PenaltyKind::ShiftOnRestDay,
            shift_on_rest_day(days, employee.work_cycle(), row, off),
        )
        .with(
            PenaltyKind::CycleUniformity,
            cycle_uniformity(days, employee.work_cycle(), row, shifts.len()),
        )
        .with(
            PenaltyKind::TransitionViolation,
            transition_violation(days, employee.work_cycle(), row, shifts),
        )
        .with(
            PenaltyKind::MissingRest,
            missing_rest(days, employee.work_cycle(), row, shifts.len(), off),
        )
}

/// A block window closes on the first rest day of a cycle and on the last
/// day of the horizon.
#[inline]
fn closes_block(cycle: &WorkCycle, day: &Day) -> bool {
    cycle.is_cycle_end(day, CycleBoundary::RestToRest) || day.is_final_day()
}

/// Rule 1: OFF assigned on a work day.
pub(crate) fn off_on_work_day(days: &[Day], cycle: &WorkCycle, row: &[usize], off: usize) -> u64 {
    days.iter()
        .zip(row)
        .filter(|(day, &shift)| cycle.is_work_day(day) && shift == off)
        .count() as u64
}

/// Rule 2: one point per matching entry of the skill-forbidden list on a
/// work day.
pub(crate) fn skill_violation(days: &[Day], employee: &Employee, row: &[usize]) -> u64 {
    let forbidden = employee.skill().forbidden_shifts();
    if forbidden.is_empty() {
        return 0;
    }

    let cycle = employee.work_cycle();
    days.iter()
        .zip(row)
        .filter(|(day, _)| cycle.is_work_day(day))
        .map(|(_, &shift)| forbidden.iter().filter(|&&f| f == shift).count() as u64)
        .sum()
}

/// Rule 3: a working shift assigned on a rest day.
pub(crate) fn shift_on_rest_day(days: &[Day], cycle: &WorkCycle, row: &[usize], off: usize) -> u64 {
    days.iter()
        .zip(row)
        .filter(|(day, &shift)| cycle.is_rest_day(day) && shift != off)
        .count() as u64
}

/// Rule 4: more than one distinct shift inside a block window.
///
/// The window's shift set (OFF included) costs `set size x smallest index`.
/// With OFF at index 0 a block that only mixes OFF with one working shift
/// is free. This weighting is the established objective; confirm with the
/// roster owners before changing it.
pub(crate) fn cycle_uniformity(days: &[Day], cycle: &WorkCycle, row: &[usize], n_shifts: usize) -> u64 {
    let mut tally = ShiftTally::new(n_shifts);
    let mut count = 0;

    for (day, &shift) in days.iter().zip(row) {
        tally.record(shift);
        if !closes_block(cycle, day) {
            continue;
        }

        let distinct = tally.distinct();
        if distinct > 1 {
            if let Some(min) = tally.min_index() {
                count += (distinct * min) as u64;
            }
        }
        tally.clear();
    }
    count
}

/// Rule 5: forbidden transitions between consecutive block windows.
///
/// Windows hold working shifts only and close on the same boundaries as
/// rule 4. Each forbidden pair `(p, c)` is checked against the whole
/// previous window and the whole current window: if `p` occurs anywhere
/// before and `c` anywhere now, every occurrence of `c` counts. Confirm
/// with the roster owners before narrowing this to adjacent days.
pub(crate) fn transition_violation(
    days: &[Day],
    cycle: &WorkCycle,
    row: &[usize],
    shifts: &ShiftCatalog,
) -> u64 {
    let off = shifts.off_index();
    let mut previous = ShiftTally::new(shifts.len());
    let mut current = ShiftTally::new(shifts.len());
    let mut count = 0;

    for (day, &shift) in days.iter().zip(row) {
        if shift != off {
            current.record(shift);
        }
        if !closes_block(cycle, day) {
            continue;
        }

        if !previous.is_empty() {
            for transition in shifts.forbidden_transitions() {
                if previous.contains(transition.previous) && current.contains(transition.current) {
                    count += u64::from(current.count(transition.current));
                }
            }
        }

        std::mem::swap(&mut previous, &mut current);
        current.clear();
    }
    count
}

/// Rule 6: headcount outside a shift's bounds on a weekday.
pub(crate) fn headcount_mismatch(catalog: &Catalog, day: &Day, schedule: &Schedule) -> u64 {
    if day.is_weekend() {
        return 0;
    }

    let mut staffed = ShiftTally::new(catalog.n_shifts());
    for employee in 0..catalog.n_employees() {
        staffed.record(schedule.shift_index(Condition::new(employee, day.index())));
    }

    catalog
        .shift_catalog()
        .work_shifts()
        .map(|shift| {
            let n = staffed.count(shift.index());
            if n < shift.min_headcount() {
                u64::from(shift.min_headcount() - n)
            } else if n > shift.max_headcount() {
                u64::from(n - shift.max_headcount())
            } else {
                0
            }
        })
        .sum()
}

/// Rule 7: a full work-to-rest window without a single OFF.
///
/// A trailing window still open at the end of the horizon is not judged.
pub(crate) fn missing_rest(
    days: &[Day],
    cycle: &WorkCycle,
    row: &[usize],
    n_shifts: usize,
    off: usize,
) -> u64 {
    let mut tally = ShiftTally::new(n_shifts);
    let mut count = 0;

    for (day, &shift) in days.iter().zip(row) {
        tally.record(shift);
        if !cycle.is_cycle_end(day, CycleBoundary::WorkToRest) {
            continue;
        }

        if !tally.contains(off) {
            count += 1;
        }
        tally.clear();
    }
    count
}
