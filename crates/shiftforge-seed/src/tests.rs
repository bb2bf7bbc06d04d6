//! Tests for seed generation.

use shiftforge_core::{Capability, Catalog, Employee, ShiftForgeError, Skill, WorkCycle};
use shiftforge_test::{catalog_with, cycle_catalog, reference_catalog, start};

use crate::{random_uniform_schedule, seeded_rng, SeedGenerator};

const OFF: usize = 0;
const DAY: usize = 1;
const NIGHT: usize = 2;
const SPLIT: usize = 3;

fn employee(id: &str) -> Employee {
    let cycle = WorkCycle::new(5, start()).unwrap();
    Employee::new(id, id.to_uppercase(), Skill::new(), cycle)
}

fn without_split(id: &str) -> Employee {
    let split = Capability::new("a", SPLIT);
    let cycle = WorkCycle::new(5, start()).unwrap();
    Employee::new(id, id.to_uppercase(), Skill::new().with_flag(&split, false), cycle)
}

fn assert_partition(catalog: &Catalog, cells: &[usize]) {
    for condition in catalog.conditions() {
        let employee = &catalog.employees()[condition.employee];
        let day = &catalog.days()[condition.day];
        let shift = cells[catalog.flat_index(condition)];

        if employee.work_cycle().is_rest_day(day) {
            assert_eq!(shift, OFF, "{} on {} should rest", employee, day);
        } else {
            assert_ne!(shift, OFF, "{} on {} should work", employee, day);
        }
    }
}

// ============================================================================
// Work/rest partition
// ============================================================================

#[test]
fn test_off_exactly_on_rest_days() {
    let catalog = reference_catalog();
    let generator = SeedGenerator::new(&catalog);

    for seed in 0..20 {
        let cells = generator.generate(&mut seeded_rng(Some(seed))).unwrap();
        assert_eq!(cells.len(), catalog.n_conditions());
        assert_partition(&catalog, &cells);
    }
}

#[test]
fn test_partition_with_shifted_cycles() {
    let employees = vec![
        Employee::new("x", "X", Skill::new(), WorkCycle::new(4, start()).unwrap()),
        Employee::new(
            "y",
            "Y",
            Skill::new(),
            WorkCycle::new(5, shiftforge_test::date(3, 29)).unwrap(),
        ),
    ];
    let catalog = catalog_with(employees, 20);
    let generator = SeedGenerator::new(&catalog);

    for seed in 0..10 {
        let cells = generator.generate(&mut seeded_rng(Some(seed))).unwrap();
        assert_partition(&catalog, &cells);
    }
}

#[test]
fn test_block_shift_is_stable_within_a_cycle() {
    let catalog = cycle_catalog(3, 5, 28);
    let generator = SeedGenerator::new(&catalog);
    let schedule = generator
        .generate_schedule(&mut seeded_rng(Some(11)))
        .unwrap();

    for row in schedule.rows() {
        for block in row.chunks(7) {
            assert!(block[..5].iter().all(|&s| s == block[0]));
        }
    }
}

// ============================================================================
// Allowed shifts
// ============================================================================

#[test]
fn test_allowed_shifts_exclude_off_forbidden_and_gated() {
    let employees = vec![
        employee("a"),
        without_split("b").with_forbidden_shifts([DAY]),
    ];
    let catalog = catalog_with(employees, 14);
    let generator = SeedGenerator::new(&catalog);

    assert_eq!(
        generator.allowed_shifts(&catalog.employees()[0]).unwrap(),
        vec![DAY, NIGHT, SPLIT]
    );
    assert_eq!(
        generator.allowed_shifts(&catalog.employees()[1]).unwrap(),
        vec![NIGHT]
    );
}

#[test]
fn test_seed_never_uses_disallowed_shifts() {
    let employees = vec![without_split("a"), employee("b").with_forbidden_shifts([NIGHT])];
    let catalog = catalog_with(employees, 28);
    let generator = SeedGenerator::new(&catalog);

    for seed in 0..20 {
        let schedule = generator
            .generate_schedule(&mut seeded_rng(Some(seed)))
            .unwrap();
        assert!(!schedule.row(0).contains(&SPLIT));
        assert!(!schedule.row(1).contains(&NIGHT));
    }
}

#[test]
fn test_empty_allowed_set_is_config_error() {
    let stuck = without_split("z").with_forbidden_shifts([DAY, NIGHT]);
    let catalog = catalog_with(vec![employee("a"), stuck], 14);
    let generator = SeedGenerator::new(&catalog);

    let err = generator.generate(&mut seeded_rng(Some(1))).unwrap_err();
    assert!(err.is_config_error());
    assert!(err.to_string().contains("'z'"));
    assert!(generator.validate().is_err());
}

// ============================================================================
// Transitions between blocks
// ============================================================================

#[test]
fn test_night_block_is_followed_by_day() {
    // Without Split the only successor of Night is Day.
    let catalog = catalog_with(vec![without_split("a"), without_split("b")], 35);
    let generator = SeedGenerator::new(&catalog);

    for seed in 0..30 {
        let schedule = generator
            .generate_schedule(&mut seeded_rng(Some(seed)))
            .unwrap();
        for row in schedule.rows() {
            let blocks: Vec<usize> = row.chunks(7).map(|b| b[0]).collect();
            for pair in blocks.windows(2) {
                if pair[0] == NIGHT {
                    assert_eq!(pair[1], DAY);
                }
            }
        }
    }
}

#[test]
fn test_no_successor_is_config_error() {
    // Only Night is allowed and Night -> Night is forbidden.
    let night_only = without_split("a").with_forbidden_shifts([DAY]);
    let catalog = catalog_with(vec![night_only], 14);
    let generator = SeedGenerator::new(&catalog);

    let err = generator
        .generate_row(&catalog.employees()[0], &mut seeded_rng(Some(3)))
        .unwrap_err();
    assert_eq!(
        err,
        ShiftForgeError::NoAllowedSuccessor {
            employee: "a".to_string(),
            previous: "N".to_string(),
        }
    );
    assert!(err.is_config_error());
}

#[test]
fn test_single_block_needs_no_successor() {
    // The horizon ends before the first rest-to-rest boundary.
    let night_only = without_split("a").with_forbidden_shifts([DAY]);
    let catalog = catalog_with(vec![night_only], 5);
    let generator = SeedGenerator::new(&catalog);

    let row = generator
        .generate_row(&catalog.employees()[0], &mut seeded_rng(Some(3)))
        .unwrap();
    assert_eq!(row, vec![NIGHT; 5]);
}

// ============================================================================
// Randomness
// ============================================================================

#[test]
fn test_same_seed_same_schedule() {
    let catalog = reference_catalog();
    let generator = SeedGenerator::new(&catalog);

    let first = generator.generate(&mut seeded_rng(Some(42))).unwrap();
    let second = generator.generate(&mut seeded_rng(Some(42))).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unseeded_rng_still_respects_partition() {
    let catalog = reference_catalog();
    let cells = SeedGenerator::new(&catalog)
        .generate(&mut seeded_rng(None))
        .unwrap();
    assert_partition(&catalog, &cells);
}

#[test]
fn test_uniform_schedule_covers_catalog() {
    let catalog = reference_catalog();
    let mut rng = seeded_rng(Some(5));
    let schedule = random_uniform_schedule(&catalog, &mut rng).unwrap();

    assert_eq!(schedule.len(), catalog.n_conditions());
    assert!(schedule.as_flat().iter().all(|&s| s < catalog.n_shifts()));
    // 126 uniform draws over 4 shifts hit every shift.
    for shift in 0..catalog.n_shifts() {
        assert!(schedule.as_flat().contains(&shift));
    }
}
