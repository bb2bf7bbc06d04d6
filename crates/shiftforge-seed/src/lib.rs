//! Seed schedules for ShiftForge rosters.
//!
//! - [`SeedGenerator`] builds block-stable schedules that respect every
//!   employee's work/rest partition, skills and shift transitions
//! - [`random_uniform_schedule`] draws every cell uniformly, ignoring all rules
//! - [`seeded_rng`] builds the reproducible random source both take
//!
//! Randomness is always injected, never global.

mod generator;
mod rng;

#[cfg(test)]
mod tests;

pub use generator::{random_uniform_schedule, SeedGenerator};
pub use rng::{seeded_rng, SeedRng};
