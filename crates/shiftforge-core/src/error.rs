//! Error types for ShiftForge

use thiserror::Error;

/// Main error type for ShiftForge operations.
///
/// Every variant is a precondition violation: either the catalogs are
/// misconfigured or a caller handed in a malformed schedule. None of them
/// is transient, so callers surface them instead of retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShiftForgeError {
    /// A catalog was asked for an index it does not have.
    #[error("Configuration error: invalid {kind} index {index} (valid: 0 <= index < {len})")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    /// A catalog was asked for an id (or date) it does not contain.
    #[error("Configuration error: unknown {kind} '{id}'")]
    UnknownId { kind: &'static str, id: String },

    /// An employee cannot work any non-rest shift.
    #[error("Configuration error: no shift available for employee '{employee}'")]
    NoAllowedShifts { employee: String },

    /// Every allowed shift of an employee is forbidden after `previous`, so
    /// no block can follow a `previous` block.
    #[error("Configuration error: no shift may follow '{previous}' for employee '{employee}'")]
    NoAllowedSuccessor { employee: String, previous: String },

    /// Cycle-boundary pattern other than `work_to_rest` / `rest_to_rest`.
    #[error("Configuration error: unknown cycle boundary '{0}' (expected 'work_to_rest' or 'rest_to_rest')")]
    UnknownCycleBoundary(String),

    /// Penalty name that does not match any of the seven penalty kinds.
    #[error("Configuration error: unknown penalty '{0}'")]
    UnknownPenalty(String),

    /// Structurally invalid catalog (duplicates, bad bounds, empty horizon...).
    #[error("Configuration error: {0}")]
    InvalidCatalog(String),

    /// Flat schedule length does not match `n_employees * n_days`.
    #[error("Invalid schedule: expected {expected} cells, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Schedule validated against a catalog of another shape.
    #[error("Invalid schedule: built for {employees} employees x {days} days, catalog has {expected_employees} x {expected_days}")]
    ShapeMismatch {
        expected_employees: usize,
        expected_days: usize,
        employees: usize,
        days: usize,
    },

    /// Flat schedule value that is not a shift index.
    #[error("Invalid schedule: value {value} at position {position} is not a shift index (valid: 0 <= value < {n_shifts})")]
    InvalidShiftIndex {
        position: usize,
        value: usize,
        n_shifts: usize,
    },
}

impl ShiftForgeError {
    /// Returns true for misconfigured catalogs.
    pub fn is_config_error(&self) -> bool {
        !self.is_input_error()
    }

    /// Returns true for malformed schedule input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ShiftForgeError::LengthMismatch { .. }
                | ShiftForgeError::ShapeMismatch { .. }
                | ShiftForgeError::InvalidShiftIndex { .. }
        )
    }
}

/// Result type alias for ShiftForge operations
pub type Result<T> = std::result::Result<T, ShiftForgeError>;
