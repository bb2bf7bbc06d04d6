//! Tests for the domain model.

use chrono::NaiveDate;

use super::*;
use crate::error::ShiftForgeError;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

fn shifts() -> ShiftCatalog {
    ShiftCatalog::new(vec![
        Shift::new("O", "Off", 1, 2).as_rest(),
        Shift::new("D", "Day", 1, 2),
        Shift::new("N", "Night", 1, 2),
        Shift::new("S", "Split", 1, 2),
    ])
    .unwrap()
    .forbid_transition("N", "N")
    .unwrap()
    .forbid_transition("N", "S")
    .unwrap()
    .forbid_transition("S", "N")
    .unwrap()
}

fn catalog() -> Catalog {
    let split = Capability::new("a", 3);
    let night = Capability::new("b", 2);
    let cycle = WorkCycle::new(5, date(4, 1)).unwrap();

    let employees = vec![
        Employee::new(
            "a",
            "A",
            Skill::new().with_flag(&split, true).with_flag(&night, true),
            cycle,
        ),
        Employee::new(
            "b",
            "B",
            Skill::new().with_flag(&split, false).with_flag(&night, true),
            cycle,
        )
        .with_forbidden_shifts([1])
        .with_holidays([date(4, 3)]),
    ];

    Catalog::new(Horizon::new(date(4, 1), 14).unwrap(), shifts(), employees).unwrap()
}

// ============================================================================
// Horizon / Day
// ============================================================================

mod horizon {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        let catalog = catalog();
        for day in catalog.days() {
            assert_eq!(catalog.day(day.index()).unwrap(), day);
            assert_eq!(catalog.day_by_date(day.date()).unwrap(), day);
        }
    }

    #[test]
    fn test_final_and_weekend() {
        let horizon = Horizon::new(date(4, 1), 14).unwrap();
        let finals: Vec<usize> = horizon
            .days()
            .iter()
            .filter(|d| d.is_final_day())
            .map(Day::index)
            .collect();
        assert_eq!(finals, vec![13]);

        let weekends: Vec<usize> = horizon
            .days()
            .iter()
            .filter(|d| d.is_weekend())
            .map(Day::index)
            .collect();
        assert_eq!(weekends, vec![5, 6, 12, 13]);
    }

    #[test]
    fn test_day_attributes() {
        let horizon = Horizon::new(date(4, 1), 14).unwrap();
        let day = horizon.day(2).unwrap();
        assert_eq!(day.year(), 2024);
        assert_eq!(day.month(), 4);
        assert_eq!(day.day_of_month(), 3);
        assert_eq!(day.weekday_index(), 2);
        assert_eq!(day.weekday_label(), "Wed");
        assert_eq!(day.to_string(), "Day_2024/04/03");
    }

    #[test]
    fn test_out_of_range() {
        let horizon = Horizon::new(date(4, 1), 14).unwrap();
        assert_eq!(
            horizon.day(14).unwrap_err(),
            ShiftForgeError::IndexOutOfRange {
                kind: "day",
                index: 14,
                len: 14
            }
        );
        assert!(horizon.day_by_date(date(3, 31)).is_err());
        assert!(horizon.day_by_date(date(4, 15)).is_err());
    }

    #[test]
    fn test_empty_horizon_rejected() {
        assert!(Horizon::new(date(4, 1), 0).unwrap_err().is_config_error());
    }
}

// ============================================================================
// Shift catalog
// ============================================================================

mod shift_catalog {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        let shifts = shifts();
        for (i, shift) in shifts.shifts().iter().enumerate() {
            assert_eq!(shift.index(), i);
            assert_eq!(shifts.shift(shift.index()).unwrap(), shift);
            assert_eq!(shifts.by_id(shift.id()).unwrap(), shift);
        }
        assert!(shifts.shift(4).is_err());
    }

    #[test]
    fn test_off_and_work_shifts() {
        let shifts = shifts();
        assert_eq!(shifts.off_index(), 0);
        assert!(shifts.off().is_rest());
        let work: Vec<&str> = shifts.work_shifts().map(Shift::id).collect();
        assert_eq!(work, vec!["D", "N", "S"]);
    }

    #[test]
    fn test_transitions_keep_order() {
        let shifts = shifts();
        let pairs: Vec<(usize, usize)> = shifts
            .forbidden_transitions()
            .iter()
            .map(|t| (t.previous, t.current))
            .collect();
        assert_eq!(pairs, vec![(2, 2), (2, 3), (3, 2)]);
        assert_eq!(shifts.forbidden_successors(2).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(shifts.forbidden_successors(1).count(), 0);
    }

    #[test]
    fn test_invalid_catalogs() {
        let dup = ShiftCatalog::new(vec![
            Shift::new("O", "Off", 0, 1).as_rest(),
            Shift::new("O", "Again", 0, 1),
        ]);
        assert!(dup.is_err());

        let bounds = ShiftCatalog::new(vec![
            Shift::new("O", "Off", 0, 1).as_rest(),
            Shift::new("D", "Day", 3, 1),
        ]);
        assert!(bounds.is_err());

        let no_rest = ShiftCatalog::new(vec![Shift::new("D", "Day", 1, 2)]);
        assert!(no_rest.is_err());

        let two_rest = ShiftCatalog::new(vec![
            Shift::new("O", "Off", 0, 1).as_rest(),
            Shift::new("X", "Also off", 0, 1).as_rest(),
        ]);
        assert!(two_rest.is_err());

        let unknown = shifts().forbid_transition("N", "Z").unwrap_err();
        assert_eq!(
            unknown,
            ShiftForgeError::UnknownId {
                kind: "shift",
                id: "Z".to_string()
            }
        );
    }
}

// ============================================================================
// Skill
// ============================================================================

#[test]
fn test_skill_gates_independently() {
    let split = Capability::new("a", 3);
    let night = Capability::new("b", 2);

    let full = Skill::new().with_flag(&split, true).with_flag(&night, true);
    assert!(full.forbidden_shifts().is_empty());

    let no_night = Skill::new().with_flag(&split, true).with_flag(&night, false);
    assert_eq!(no_night.forbidden_shifts(), vec![2]);
    assert!(no_night.forbids(2));
    assert!(!no_night.forbids(3));

    assert_eq!(no_night.has("b"), Some(false));
    assert_eq!(no_night.has("c"), None);
}

// ============================================================================
// WorkCycle
// ============================================================================

mod work_cycle {
    use super::*;

    #[test]
    fn test_work_xor_rest() {
        let horizon = Horizon::new(date(4, 1), 14).unwrap();
        for w in 1..=6 {
            for start_day in 1..=8 {
                let cycle = WorkCycle::new(w, date(4, start_day)).unwrap();
                for day in horizon.days() {
                    assert_ne!(cycle.is_work_day(day), cycle.is_rest_day(day));
                }
            }
        }
    }

    #[test]
    fn test_two_rest_days_per_cycle() {
        for w in 1..=6 {
            let cycle = WorkCycle::new(w, date(4, 3)).unwrap();
            let horizon = Horizon::new(date(4, 1), cycle.n_cycle_days() as usize).unwrap();
            let rest = horizon.days().iter().filter(|d| cycle.is_rest_day(d)).count();
            assert_eq!(rest, 2);
        }
    }

    #[test]
    fn test_offset_before_start_wraps() {
        // Cycle starts after the horizon start; offsets must stay non-negative.
        let cycle = WorkCycle::new(5, date(4, 3)).unwrap();
        let horizon = Horizon::new(date(4, 1), 3).unwrap();
        let offsets: Vec<u32> = horizon.days().iter().map(|d| cycle.day_in_cycle(d)).collect();
        assert_eq!(offsets, vec![5, 6, 0]);
        assert!(cycle.is_rest_day(horizon.day(0).unwrap()));
        assert!(cycle.is_work_day(horizon.day(2).unwrap()));
    }

    #[test]
    fn test_cycle_end_patterns() {
        let cycle = WorkCycle::new(5, date(4, 1)).unwrap();
        let horizon = Horizon::new(date(4, 1), 14).unwrap();

        let rest_to_rest: Vec<usize> = horizon
            .days()
            .iter()
            .filter(|d| cycle.is_cycle_end(d, CycleBoundary::RestToRest))
            .map(Day::index)
            .collect();
        assert_eq!(rest_to_rest, vec![5, 12]);

        let work_to_rest: Vec<usize> = horizon
            .days()
            .iter()
            .filter(|d| cycle.is_cycle_end(d, CycleBoundary::WorkToRest))
            .map(Day::index)
            .collect();
        assert_eq!(work_to_rest, vec![6, 13]);
    }

    #[test]
    fn test_boundary_parse() {
        assert_eq!(
            "work_to_rest".parse::<CycleBoundary>().unwrap(),
            CycleBoundary::WorkToRest
        );
        assert_eq!(
            "rest_to_rest".parse::<CycleBoundary>().unwrap(),
            CycleBoundary::RestToRest
        );
        let err = "rest_to_work".parse::<CycleBoundary>().unwrap_err();
        assert_eq!(
            err,
            ShiftForgeError::UnknownCycleBoundary("rest_to_work".to_string())
        );
        assert!(err.is_config_error());
    }

    #[test]
    fn test_zero_work_days_rejected() {
        assert!(WorkCycle::new(0, date(4, 1)).is_err());
    }
}

// ============================================================================
// Catalog
// ============================================================================

mod catalog {
    use super::*;

    #[test]
    fn test_employee_round_trip() {
        let catalog = catalog();
        for employee in catalog.employees() {
            assert_eq!(catalog.employee(employee.index()).unwrap(), employee);
            assert_eq!(catalog.employee_by_id(employee.id()).unwrap(), employee);
        }
        assert!(catalog.employee(2).is_err());
        assert!(catalog.employee_by_id("z").is_err());
    }

    #[test]
    fn test_holidays() {
        let catalog = catalog();
        let b = catalog.employee_by_id("b").unwrap();
        assert!(b.is_holiday(catalog.day(2).unwrap()));
        assert!(!b.is_holiday(catalog.day(3).unwrap()));
    }

    #[test]
    fn test_conditions_are_employee_major() {
        let catalog = catalog();
        let conditions: Vec<Condition> = catalog.conditions().collect();
        assert_eq!(conditions.len(), 28);
        assert_eq!(conditions[0], Condition::new(0, 0));
        assert_eq!(conditions[13], Condition::new(0, 13));
        assert_eq!(conditions[14], Condition::new(1, 0));

        for (position, condition) in conditions.iter().enumerate() {
            assert_eq!(catalog.flat_index(*condition), position);
            assert_eq!(catalog.condition_at(position).unwrap(), *condition);
        }
        assert!(catalog.condition_at(28).is_err());
    }

    #[test]
    fn test_allowed_shifts() {
        let catalog = catalog();
        let a = catalog.employee_by_id("a").unwrap();
        let b = catalog.employee_by_id("b").unwrap();
        assert_eq!(catalog.allowed_shifts(a), vec![1, 2, 3]);
        // personal: Day; skill: Split
        assert_eq!(catalog.allowed_shifts(b), vec![2]);
    }

    #[test]
    fn test_invalid_rosters() {
        let horizon = Horizon::new(date(4, 1), 14).unwrap();
        let cycle = WorkCycle::new(5, date(4, 1)).unwrap();

        let empty = Catalog::new(horizon.clone(), shifts(), vec![]);
        assert!(empty.is_err());

        let dup = Catalog::new(
            horizon.clone(),
            shifts(),
            vec![
                Employee::new("a", "A", Skill::new(), cycle),
                Employee::new("a", "A2", Skill::new(), cycle),
            ],
        );
        assert!(dup.is_err());

        let bad_shift = Catalog::new(
            horizon.clone(),
            shifts(),
            vec![Employee::new("a", "A", Skill::new(), cycle).with_forbidden_shifts([9])],
        );
        assert!(bad_shift.is_err());

        let bad_holiday = Catalog::new(
            horizon,
            shifts(),
            vec![Employee::new("a", "A", Skill::new(), cycle).with_holidays([date(5, 1)])],
        );
        assert!(bad_holiday.is_err());
    }
}

// ============================================================================
// Schedule
// ============================================================================

mod schedule {
    use super::*;

    #[test]
    fn test_shape_errors() {
        let catalog = catalog();

        let short = Schedule::from_flat(&catalog, vec![0; 27]).unwrap_err();
        assert_eq!(
            short,
            ShiftForgeError::LengthMismatch {
                expected: 28,
                actual: 27
            }
        );
        assert!(short.is_input_error());

        let mut cells = vec![0; 28];
        cells[17] = 4;
        let bad = Schedule::from_flat(&catalog, cells).unwrap_err();
        assert_eq!(
            bad,
            ShiftForgeError::InvalidShiftIndex {
                position: 17,
                value: 4,
                n_shifts: 4
            }
        );
        assert!(bad.is_input_error());
    }

    #[test]
    fn test_check_catalog_rejects_foreign_schedules() {
        let catalog = catalog();
        let schedule = Schedule::from_flat(&catalog, vec![3; 28]).unwrap();
        assert!(schedule.check_catalog(&catalog).is_ok());

        // Same cell count, different shape and only two shifts.
        let two_shifts = ShiftCatalog::new(vec![
            Shift::new("O", "Off", 0, 9).as_rest(),
            Shift::new("D", "Day", 1, 2),
        ])
        .unwrap();
        let cycle = WorkCycle::new(5, date(4, 1)).unwrap();
        let long = Catalog::new(
            Horizon::new(date(4, 1), 28).unwrap(),
            two_shifts.clone(),
            vec![Employee::new("x", "X", Skill::new(), cycle)],
        )
        .unwrap();
        let err = schedule.check_catalog(&long).unwrap_err();
        assert_eq!(
            err,
            ShiftForgeError::ShapeMismatch {
                expected_employees: 1,
                expected_days: 28,
                employees: 2,
                days: 14
            }
        );
        assert!(err.is_input_error());

        // Same shape, fewer shifts.
        let narrow = Catalog::new(
            Horizon::new(date(4, 1), 14).unwrap(),
            two_shifts,
            vec![
                Employee::new("x", "X", Skill::new(), cycle),
                Employee::new("y", "Y", Skill::new(), cycle),
            ],
        )
        .unwrap();
        assert_eq!(
            schedule.check_catalog(&narrow).unwrap_err(),
            ShiftForgeError::InvalidShiftIndex {
                position: 0,
                value: 3,
                n_shifts: 2
            }
        );
        let fitting = Schedule::from_flat(&catalog, vec![1; 28]).unwrap();
        assert!(fitting.check_catalog(&narrow).is_ok());
    }

    #[test]
    fn test_rows_and_cells() {
        let catalog = catalog();
        let schedule = Schedule::from_fn(&catalog, |c| (c.employee + c.day) % 4).unwrap();

        assert_eq!(schedule.n_employees(), 2);
        assert_eq!(schedule.n_days(), 14);
        assert_eq!(schedule.row(1)[0], 1);
        assert_eq!(schedule.rows().count(), 2);
        for (condition, shift) in schedule.iter() {
            assert_eq!(schedule.shift_index(condition), shift);
            assert_eq!(schedule.as_flat()[catalog.flat_index(condition)], shift);
        }
    }
}
