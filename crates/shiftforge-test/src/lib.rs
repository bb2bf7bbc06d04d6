//! Shared test fixtures for ShiftForge crates.
//!
//! This crate provides catalogs and schedule builders for testing.
//! It does NOT depend on `shiftforge-scoring` or `shiftforge-seed` so both
//! can use it as a dev-dependency.
//!
//! - [`catalogs`] - reference roster and small hand-sized catalogs
//! - [`rows`] - schedules written as one string of shift ids per employee
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! shiftforge-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use shiftforge_test::{reference_catalog, schedule_from_rows};
//!
//! let catalog = reference_catalog();
//! let schedule = schedule_from_rows(&catalog, &["DDDDDOODDDDDOO"; 9]);
//! ```

pub mod catalogs;
pub mod rows;

pub use catalogs::{
    catalog_with, cycle_catalog, date, reference_catalog, reference_shifts, single_day_catalog,
    start, two_shift_catalog,
};
pub use rows::schedule_from_rows;
