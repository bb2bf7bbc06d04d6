//! Score types for representing schedule quality
//!
//! Penalty counts are non-negative; the score an optimizer maximises is the
//! negated weighted penalty total, so `0` is a perfect schedule.

mod simple;

#[cfg(test)]
mod tests;

pub use simple::SimpleScore;
