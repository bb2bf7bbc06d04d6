//! Catalog fixtures.
//!
//! All fixtures start on Monday 2024-04-01 and, except
//! [`single_day_catalog`] and [`two_shift_catalog`], use the reference shift catalog
//! (O=0, D=1, N=2, S=3; forbidden N->N, N->S, S->N).

use chrono::NaiveDate;
use shiftforge_config::ShiftForgeConfig;
use shiftforge_core::{
    Capability, Catalog, Employee, Horizon, Shift, ShiftCatalog, Skill, WorkCycle,
};

/// Monday 2024-04-01.
pub fn start() -> NaiveDate {
    date(4, 1)
}

/// A 2024 date.
pub fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).expect("valid fixture date")
}

/// The reference roster: 9 employees x 14 days.
pub fn reference_catalog() -> Catalog {
    ShiftForgeConfig::reference()
        .build_catalog()
        .expect("reference roster is valid")
}

/// Reference shifts with every headcount bound set to `min..=max`.
pub fn reference_shifts(min: u32, max: u32) -> ShiftCatalog {
    ShiftCatalog::new(vec![
        Shift::new("O", "Off", min, max).as_rest(),
        Shift::new("D", "Day", min, max),
        Shift::new("N", "Night", min, max),
        Shift::new("S", "Split", min, max),
    ])
    .and_then(|s| s.forbid_transition("N", "N"))
    .and_then(|s| s.forbid_transition("N", "S"))
    .and_then(|s| s.forbid_transition("S", "N"))
    .expect("reference shifts are valid")
}

/// Fully skilled employees `e0..` on a `work_days`-on/2-off cycle from
/// [`start`], over `n_days` days, headcount bounds 1..=2.
pub fn cycle_catalog(n_employees: usize, work_days: u32, n_days: usize) -> Catalog {
    let shifts = reference_shifts(1, 2);
    let split = Capability::new("a", 3);
    let night = Capability::new("b", 2);
    let cycle = WorkCycle::new(work_days, start()).expect("valid cycle");

    let employees = (0..n_employees)
        .map(|i| {
            let skill = Skill::new().with_flag(&split, true).with_flag(&night, true);
            Employee::new(format!("e{}", i), format!("E{}", i), skill, cycle)
        })
        .collect();

    Catalog::new(
        Horizon::new(start(), n_days).expect("valid horizon"),
        shifts,
        employees,
    )
    .expect("valid catalog")
}

/// `n_employees` x one weekday (Monday), shifts `O` and `D` with the Day
/// shift bounded to `min..=max`.
pub fn single_day_catalog(n_employees: usize, min: u32, max: u32) -> Catalog {
    two_shift_catalog(n_employees, 1, min, max)
}

/// `n_employees` x `n_days` from [`start`], shifts `O` and `D` with the Day
/// shift bounded to `min..=max`.
pub fn two_shift_catalog(n_employees: usize, n_days: usize, min: u32, max: u32) -> Catalog {
    let shifts = ShiftCatalog::new(vec![
        Shift::new("O", "Off", 0, u32::MAX).as_rest(),
        Shift::new("D", "Day", min, max),
    ])
    .expect("valid shifts");
    let cycle = WorkCycle::new(5, start()).expect("valid cycle");

    let employees = (0..n_employees)
        .map(|i| Employee::new(format!("e{}", i), format!("E{}", i), Skill::new(), cycle))
        .collect();

    Catalog::new(
        Horizon::new(start(), n_days).expect("valid horizon"),
        shifts,
        employees,
    )
    .expect("valid catalog")
}

/// Reference shifts (bounds 1..=2) with the given roster over `n_days`.
pub fn catalog_with(employees: Vec<Employee>, n_days: usize) -> Catalog {
    Catalog::new(
        Horizon::new(start(), n_days).expect("valid horizon"),
        reference_shifts(1, 2),
        employees,
    )
    .expect("valid catalog")
}
