//! Constraint evaluation for ShiftForge rosters.
//!
//! This crate scores complete schedules against the seven workforce rules:
//! - `ConstraintEvaluator` computing the penalty vector and weighted total
//! - `PenaltyWeights` for the configurable aggregate
//! - `ShiftTally` window accumulators used by the cycle-based rules
//! - Score explanation with per-employee and per-day indictments
//!
//! # Architecture
//!
//! Every evaluation is a full recalculation over an immutable schedule.
//! The evaluator only borrows the catalog, so any number of evaluations can
//! run in parallel (see [`ConstraintEvaluator::evaluate_batch`]).

pub mod analysis;
pub mod evaluator;
pub mod penalty;
pub mod window;

mod batch;

// ============================================================================
// Evaluation
// ============================================================================

pub use evaluator::{ConstraintEvaluator, Evaluation};
pub use penalty::{Penalties, PenaltyWeights};
pub use window::ShiftTally;

// ============================================================================
// Analysis (for score explanation)
// ============================================================================

pub use analysis::{ConstraintAnalysis, Indictment, IndictmentSubject, ScoreExplanation};
