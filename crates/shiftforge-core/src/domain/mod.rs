//! Domain model of the rostering problem.
//!
//! - [`Horizon`] / [`Day`]: the fixed, contiguous planning horizon
//! - [`ShiftCatalog`] / [`Shift`]: shift kinds, headcount bounds and the
//!   forbidden transition table
//! - [`Skill`] / [`Capability`]: capability flags gating shifts
//! - [`WorkCycle`]: per-employee work/rest rhythm and cycle boundaries
//! - [`Employee`]: roster member configuration
//! - [`Catalog`]: all of the above, validated and indexed
//! - [`Condition`] / [`Schedule`]: cells and complete assignments

mod catalog;
mod condition;
mod day;
mod employee;
mod schedule;
mod shift;
mod skill;
mod work_cycle;

#[cfg(test)]
mod tests;

pub use catalog::Catalog;
pub use condition::Condition;
pub use day::{Day, Horizon};
pub use employee::Employee;
pub use schedule::Schedule;
pub use shift::{Shift, ShiftCatalog, Transition};
pub use skill::{Capability, Skill};
pub use work_cycle::{CycleBoundary, WorkCycle};
