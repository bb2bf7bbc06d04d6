//! ShiftForge Core - Core types for cyclic shift rostering
//!
//! This crate provides the fundamental abstractions for ShiftForge:
//! - Domain model: horizon days, shifts, skills, work cycles, employees
//! - Catalogs and schedules built from flat shift-index sequences
//! - Penalty kinds and the score type used by the evaluator
//! - The error type shared by every ShiftForge crate

pub mod constraint;
pub mod domain;
pub mod error;
pub mod score;

pub use constraint::PenaltyKind;
pub use domain::{
    Capability, Catalog, Condition, CycleBoundary, Day, Employee, Horizon, Schedule, Shift,
    ShiftCatalog, Skill, Transition, WorkCycle,
};
pub use error::{Result, ShiftForgeError};
pub use score::SimpleScore;
