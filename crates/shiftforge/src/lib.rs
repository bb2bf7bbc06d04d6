//! ShiftForge - Cyclic Shift Rostering in Rust
//!
//! Scores candidate shift assignments for a fixed roster over a fixed
//! horizon, and generates feasible seeds to start a search from. Meant to
//! be the objective function of an outer optimizer or learning loop.
//!
//! # Example
//!
//! ```rust
//! use shiftforge::prelude::*;
//!
//! let problem = RosterProblem::reference().unwrap();
//! let mut rng = problem.rng();
//!
//! let seed = problem.generate_seed(&mut rng).unwrap();
//! let evaluation = problem.evaluate(&seed).unwrap();
//!
//! // Seeds never put OFF on a work day nor mix shifts inside a block.
//! assert_eq!(evaluation.penalty(PenaltyKind::OffOnWorkDay), 0);
//! assert_eq!(evaluation.total, 0);
//! ```

// Domain model
pub use shiftforge_core::{
    Capability, Catalog, Condition, CycleBoundary, Day, Employee, Horizon, PenaltyKind, Schedule,
    Shift, ShiftCatalog, ShiftForgeError, Skill, Transition, WorkCycle,
};

// Score types
pub use shiftforge_core::SimpleScore;

// Configuration
pub use shiftforge_config::{ConfigError, ShiftForgeConfig};

// Evaluation and analysis
pub use shiftforge_scoring::{
    ConstraintAnalysis, ConstraintEvaluator, Evaluation, Indictment, IndictmentSubject,
    Penalties, PenaltyWeights, ScoreExplanation,
};

// Seeds
pub use shiftforge_seed::{random_uniform_schedule, seeded_rng, SeedGenerator, SeedRng};

mod problem;
pub use problem::RosterProblem;

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{
        Catalog, ConstraintEvaluator, Evaluation, PenaltyKind, PenaltyWeights, RosterProblem,
        Schedule, ScoreExplanation, SeedGenerator, ShiftForgeConfig, SimpleScore,
    };
}
