//! Full-recalculation schedule evaluation.

mod rules;


use std::fmt;

use tracing::trace;

use shiftforge_core::{Catalog, PenaltyKind, Result, Schedule, SimpleScore};

use crate::penalty::{Penalties, PenaltyWeights};

pub(crate) use rules::{employee_penalties, headcount_mismatch};

/// The result of evaluating one schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation {
    /// The seven penalty counts.
    pub penalties: Penalties,
    /// Weighted aggregate of the counts.
    pub total: i64,
}

impl Evaluation {
    pub fn penalty(&self, kind: PenaltyKind) -> u64 {
        self.penalties.get(kind)
    }

    /// The aggregate as a score: `-total`, so higher is better and zero is a
    /// schedule with no weighted penalty.
    pub fn score(&self) -> SimpleScore {
        SimpleScore::of_penalty(self.total)
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} total={}", self.penalties, self.total)
    }
}

/// Scores complete schedules against a catalog.
///
/// The evaluator borrows the catalog and holds only the weighting, so it is
/// cheap to build and safe to share between threads.
///
/// # Example
///
/// ```
/// use shiftforge_core::{Catalog, Employee, Horizon, PenaltyKind, Schedule, Shift, ShiftCatalog, Skill, WorkCycle};
/// use shiftforge_scoring::ConstraintEvaluator;
///
/// let start = chrono::NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
/// let shifts = ShiftCatalog::new(vec![
///     Shift::new("O", "Off", 0, 9).as_rest(),
///     Shift::new("D", "Day", 1, 2),
/// ]).unwrap();
/// let cycle = WorkCycle::new(5, start).unwrap();
/// let employees = vec![
///     Employee::new("a", "A", Skill::new(), cycle),
///     Employee::new("b", "B", Skill::new(), cycle),
/// ];
/// let catalog = Catalog::new(Horizon::new(start, 1).unwrap(), shifts, employees).unwrap();
///
/// let evaluator = ConstraintEvaluator::new(&catalog);
///
/// let staffed = Schedule::from_flat(&catalog, vec![1, 1]).unwrap();
/// assert_eq!(evaluator.evaluate(&staffed).unwrap().penalty(PenaltyKind::HeadcountMismatch), 0);
///
/// let empty = Schedule::from_flat(&catalog, vec![0, 0]).unwrap();
/// let evaluation = evaluator.evaluate(&empty).unwrap();
/// assert_eq!(evaluation.penalty(PenaltyKind::HeadcountMismatch), 1);
/// assert_eq!(evaluation.penalty(PenaltyKind::OffOnWorkDay), 2);
/// assert_eq!(evaluation.total, 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConstraintEvaluator<'c> {
    catalog: &'c Catalog,
    weights: PenaltyWeights,
}

impl<'c> ConstraintEvaluator<'c> {
    /// Creates an evaluator with the reference weighting.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            weights: PenaltyWeights::reference(),
        }
    }

    pub fn with_weights(mut self, weights: PenaltyWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn weights(&self) -> &PenaltyWeights {
        &self.weights
    }

    /// Computes the seven penalty counts of a schedule.
    ///
    /// Fails with an input-shape error when the schedule does not fit this
    /// evaluator's catalog.
    pub fn penalties(&self, schedule: &Schedule) -> Result<Penalties> {
        schedule.check_catalog(self.catalog)?;

        let mut penalties: Penalties = self
            .catalog
            .employees()
            .iter()
            .zip(schedule.rows())
            .map(|(employee, row)| employee_penalties(self.catalog, employee, row))
            .sum();

        let headcount = self
            .catalog
            .days()
            .iter()
            .map(|day| headcount_mismatch(self.catalog, day, schedule))
            .sum();
        penalties.set(PenaltyKind::HeadcountMismatch, headcount);

        Ok(penalties)
    }

    /// Computes the penalty vector and the weighted aggregate.
    pub fn evaluate(&self, schedule: &Schedule) -> Result<Evaluation> {
        let penalties = self.penalties(schedule)?;
        let total = self.weights.total(&penalties);

        trace!(
            event = "evaluate",
            p1 = penalties.off_on_work_day(),
            p2 = penalties.skill_violation(),
            p3 = penalties.shift_on_rest_day(),
            p4 = penalties.cycle_uniformity(),
            p5 = penalties.transition_violation(),
            p6 = penalties.headcount_mismatch(),
            p7 = penalties.missing_rest(),
            total = total,
        );

        Ok(Evaluation { penalties, total })
    }

    /// Validates a flat shift-index sequence and evaluates it.
    ///
    /// Fails with an input-shape error on a wrong length or an index
    /// outside the shift catalog.
    pub fn evaluate_flat(&self, cells: &[usize]) -> Result<Evaluation> {
        let schedule = Schedule::from_flat(self.catalog, cells.to_vec())?;
        self.evaluate(&schedule)
    }
}
