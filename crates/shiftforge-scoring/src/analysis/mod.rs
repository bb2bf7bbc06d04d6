//! Score analysis types for schedule explanation.
//!
//! This module breaks an evaluation down per penalty kind, per employee
//! (rules 1-5 and 7) and per day (rule 6 headcount), so a caller can see
//! which rows and columns of a schedule carry the penalties.


use std::cmp::Reverse;
use std::fmt;

use shiftforge_core::{Day, PenaltyKind, Result, Schedule, SimpleScore};

use crate::evaluator::{employee_penalties, headcount_mismatch, ConstraintEvaluator, Evaluation};
use crate::penalty::{Penalties, PenaltyWeights};

/// Per-penalty breakdown in a score explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintAnalysis {
    pub kind: PenaltyKind,
    /// Weight applied to each counted violation.
    pub weight: i64,
    /// Unweighted count.
    pub count: u64,
    /// Weighted contribution to the score.
    pub score: SimpleScore,
}

impl ConstraintAnalysis {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Returns true if this penalty contributes to the aggregate.
    pub fn is_weighted(&self) -> bool {
        self.weight != 0
    }
}

/// What an indictment is about: one employee's row or one day's column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IndictmentSubject {
    Employee { index: usize, id: String },
    Day(Day),
}

impl fmt::Display for IndictmentSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndictmentSubject::Employee { id, .. } => write!(f, "Employee_id{}", id),
            IndictmentSubject::Day(day) => write!(f, "{} ({})", day, day.weekday_label()),
        }
    }
}

/// Penalties attributable to a single subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indictment {
    pub subject: IndictmentSubject,
    pub penalties: Penalties,
    /// Weighted score of `penalties`.
    pub score: SimpleScore,
}

impl Indictment {
    fn new(subject: IndictmentSubject, penalties: Penalties, weights: &PenaltyWeights) -> Self {
        Self {
            subject,
            penalties,
            score: SimpleScore::of_penalty(weights.total(&penalties)),
        }
    }

    /// Unweighted number of violations.
    pub fn match_count(&self) -> u64 {
        self.penalties.sum()
    }

    /// Penalty kinds with a non-zero count.
    pub fn violated_kinds(&self) -> Vec<PenaltyKind> {
        self.penalties
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(kind, _)| kind)
            .collect()
    }

    pub fn is_clean(&self) -> bool {
        self.penalties.is_zero()
    }
}

/// Complete score explanation with per-penalty, per-employee and per-day
/// breakdowns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreExplanation {
    pub evaluation: Evaluation,
    /// One entry per penalty kind, p1..p7 order.
    pub constraint_analyses: Vec<ConstraintAnalysis>,
    /// One entry per employee, roster order.
    pub employee_indictments: Vec<Indictment>,
    /// One entry per horizon day, headcount only.
    pub day_indictments: Vec<Indictment>,
}

impl ScoreExplanation {
    pub fn score(&self) -> SimpleScore {
        self.evaluation.score()
    }

    /// Unweighted violation count across all penalties.
    pub fn total_match_count(&self) -> u64 {
        self.evaluation.penalties.sum()
    }

    /// Penalties with a non-zero count.
    pub fn non_zero_constraints(&self) -> Vec<&ConstraintAnalysis> {
        self.constraint_analyses
            .iter()
            .filter(|a| a.count > 0)
            .collect()
    }

    pub fn employee(&self, id: &str) -> Option<&Indictment> {
        self.employee_indictments.iter().find(|i| {
            matches!(&i.subject, IndictmentSubject::Employee { id: subject, .. } if subject == id)
        })
    }

    pub fn day(&self, index: usize) -> Option<&Indictment> {
        self.day_indictments.get(index)
    }

    /// Employees with any violation, worst score first, then most
    /// violations first.
    pub fn worst_employees(&self) -> Vec<&Indictment> {
        let mut indicted: Vec<_> = self
            .employee_indictments
            .iter()
            .filter(|i| !i.is_clean())
            .collect();
        indicted.sort_by_key(|i| (i.score, Reverse(i.match_count())));
        indicted
    }

    /// Days with a headcount mismatch, horizon order.
    pub fn understaffed_days(&self) -> Vec<&Indictment> {
        self.day_indictments
            .iter()
            .filter(|i| !i.is_clean())
            .collect()
    }
}

impl fmt::Display for ScoreExplanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Score: {} ({})", self.score(), self.evaluation)?;

        for analysis in &self.constraint_analyses {
            writeln!(
                f,
                "  p{} {:<22} weight {:>3}  count {:>4}  score {:>6}",
                analysis.kind.number(),
                analysis.name(),
                analysis.weight,
                analysis.count,
                analysis.score,
            )?;
        }

        let worst = self.worst_employees();
        if !worst.is_empty() {
            writeln!(f, "Employees:")?;
            for indictment in worst {
                writeln!(
                    f,
                    "  {:<16} {}  score {}",
                    indictment.subject.to_string(),
                    indictment.penalties,
                    indictment.score
                )?;
            }
        }

        let days = self.understaffed_days();
        if !days.is_empty() {
            writeln!(f, "Headcount:")?;
            for indictment in days {
                writeln!(
                    f,
                    "  {:<22} {}",
                    indictment.subject.to_string(),
                    indictment.penalties.headcount_mismatch()
                )?;
            }
        }
        Ok(())
    }
}

impl ConstraintEvaluator<'_> {
    /// Evaluates a schedule and breaks the result down by penalty, employee
    /// and day.
    ///
    /// The employee and day partial vectors add up to the evaluation's
    /// penalty vector.
    pub fn explain(&self, schedule: &Schedule) -> Result<ScoreExplanation> {
        let catalog = self.catalog();
        schedule.check_catalog(catalog)?;

        let weights = self.weights();

        let employee_indictments: Vec<Indictment> = catalog
            .employees()
            .iter()
            .zip(schedule.rows())
            .map(|(employee, row)| {
                Indictment::new(
                    IndictmentSubject::Employee {
                        index: employee.index(),
                        id: employee.id().to_string(),
                    },
                    employee_penalties(catalog, employee, row),
                    weights,
                )
            })
            .collect();

        let day_indictments: Vec<Indictment> = catalog
            .days()
            .iter()
            .map(|day| {
                let penalties = Penalties::new().with(
                    PenaltyKind::HeadcountMismatch,
                    headcount_mismatch(catalog, day, schedule),
                );
                Indictment::new(IndictmentSubject::Day(*day), penalties, weights)
            })
            .collect();

        let penalties: Penalties = employee_indictments
            .iter()
            .chain(&day_indictments)
            .map(|i| i.penalties)
            .sum();
        let evaluation = Evaluation {
            penalties,
            total: weights.total(&penalties),
        };

        let constraint_analyses = penalties
            .iter()
            .map(|(kind, count)| ConstraintAnalysis {
                kind,
                weight: weights.get(kind),
                count,
                score: weights.score_of(kind, count),
            })
            .collect();

        Ok(ScoreExplanation {
            evaluation,
            constraint_analyses,
            employee_indictments,
            day_indictments,
        })
    }
}
