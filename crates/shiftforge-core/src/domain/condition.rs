//! Schedule cell identity.

use std::fmt;

/// Identity of one schedule cell: an (employee, day) pair of catalog indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Condition {
    pub employee: usize,
    pub day: usize,
}

impl Condition {
    #[inline]
    pub const fn new(employee: usize, day: usize) -> Self {
        Self { employee, day }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Employee_{}__Day_{}", self.employee, self.day)
    }
}
