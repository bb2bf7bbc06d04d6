//! Block-stable seed generation.

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

use shiftforge_core::{Catalog, CycleBoundary, Employee, Result, Schedule, ShiftForgeError};

/// Generates schedules that satisfy the per-employee rules by construction.
///
/// For each employee one working shift is drawn per block and repeated on
/// every work day of the block; rest days get OFF. A new block shift is
/// drawn on the first rest day of every cycle, avoiding shifts the
/// transition table forbids after the block just finished. If every allowed
/// shift is forbidden after that block, generation fails with
/// [`ShiftForgeError::NoAllowedSuccessor`] rather than emit a forbidden
/// transition.
///
/// # Example
///
/// ```
/// use shiftforge_core::{Catalog, Employee, Horizon, Shift, ShiftCatalog, Skill, WorkCycle};
/// use shiftforge_seed::{seeded_rng, SeedGenerator};
///
/// let start = chrono::NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
/// let shifts = ShiftCatalog::new(vec![
///     Shift::new("O", "Off", 0, 9).as_rest(),
///     Shift::new("D", "Day", 1, 2),
///     Shift::new("N", "Night", 1, 2),
/// ]).unwrap();
/// let cycle = WorkCycle::new(5, start).unwrap();
/// let employees = vec![Employee::new("a", "A", Skill::new(), cycle)];
/// let catalog = Catalog::new(Horizon::new(start, 7).unwrap(), shifts, employees).unwrap();
///
/// let seed = SeedGenerator::new(&catalog).generate(&mut seeded_rng(Some(7))).unwrap();
/// assert_eq!(seed.len(), 7);
/// assert_eq!(&seed[5..], &[0, 0]);
/// assert!(seed[..5].iter().all(|&s| s == seed[0] && s != 0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SeedGenerator<'c> {
    catalog: &'c Catalog,
}

impl<'c> SeedGenerator<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Working shifts the employee may be given, in catalog order.
    ///
    /// Fails when personal and skill restrictions leave nothing.
    pub fn allowed_shifts(&self, employee: &Employee) -> Result<Vec<usize>> {
        let allowed = self.catalog.allowed_shifts(employee);
        if allowed.is_empty() {
            return Err(ShiftForgeError::NoAllowedShifts {
                employee: employee.id().to_string(),
            });
        }
        Ok(allowed)
    }

    /// Checks every employee has at least one allowed shift.
    pub fn validate(&self) -> Result<()> {
        for employee in self.catalog.employees() {
            self.allowed_shifts(employee)?;
        }
        Ok(())
    }

    /// One employee's row, horizon order.
    pub fn generate_row<R: Rng + ?Sized>(&self, employee: &Employee, rng: &mut R) -> Result<Vec<usize>> {
        let allowed = self.allowed_shifts(employee)?;
        let shifts = self.catalog.shift_catalog();
        let off = shifts.off_index();
        let cycle = employee.work_cycle();

        let mut block = pick(&allowed, employee, rng)?;
        let mut row = Vec::with_capacity(self.catalog.n_days());

        for day in self.catalog.days() {
            if cycle.is_cycle_end(day, CycleBoundary::RestToRest) {
                let successors: Vec<usize> = allowed
                    .iter()
                    .copied()
                    .filter(|&s| !shifts.is_forbidden(block, s))
                    .collect();

                block = match successors.choose(rng) {
                    Some(&s) => s,
                    None => {
                        return Err(ShiftForgeError::NoAllowedSuccessor {
                            employee: employee.id().to_string(),
                            previous: shifts.shift(block)?.id().to_string(),
                        });
                    }
                };
            }

            row.push(if cycle.is_rest_day(day) { off } else { block });
        }

        debug!(event = "seed_row", employee = employee.id(), allowed = ?allowed);
        Ok(row)
    }

    /// A full seed as a flat employee-major sequence.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<usize>> {
        let mut cells = Vec::with_capacity(self.catalog.n_conditions());
        for employee in self.catalog.employees() {
            cells.extend(self.generate_row(employee, rng)?);
        }
        Ok(cells)
    }

    /// A full seed as a validated schedule.
    pub fn generate_schedule<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Schedule> {
        let cells = self.generate(rng)?;
        Schedule::from_flat(self.catalog, cells)
    }
}

fn pick<R: Rng + ?Sized>(allowed: &[usize], employee: &Employee, rng: &mut R) -> Result<usize> {
    allowed
        .choose(rng)
        .copied()
        .ok_or_else(|| ShiftForgeError::NoAllowedShifts {
            employee: employee.id().to_string(),
        })
}

/// A schedule with every cell drawn uniformly from the whole shift catalog.
///
/// Ignores cycles, skills and transitions; useful as an unconstrained
/// starting population.
pub fn random_uniform_schedule<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Result<Schedule> {
    let n_shifts = catalog.n_shifts();
    Schedule::from_fn(catalog, |_| rng.random_range(0..n_shifts))
}
