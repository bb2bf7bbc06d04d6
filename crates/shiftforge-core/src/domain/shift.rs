//! Shift kinds and the shift catalog.

use std::collections::HashSet;
use std::fmt;

use crate::error::{Result, ShiftForgeError};

/// One shift kind.
///
/// The catalog index doubles as a tie-break weight in the cycle-uniformity
/// penalty, so catalog order matters: the rest shift conventionally sits at
/// index 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shift {
    index: usize,
    id: String,
    label: String,
    min_headcount: u32,
    max_headcount: u32,
    rest: bool,
}

impl Shift {
    /// Creates a working shift with headcount bounds.
    ///
    /// The index is assigned when the shift is placed in a [`ShiftCatalog`].
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        min_headcount: u32,
        max_headcount: u32,
    ) -> Self {
        Self {
            index: 0,
            id: id.into(),
            label: label.into(),
            min_headcount,
            max_headcount,
            rest: false,
        }
    }

    /// Marks this shift as the rest (OFF) shift.
    pub fn as_rest(mut self) -> Self {
        self.rest = true;
        self
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn min_headcount(&self) -> u32 {
        self.min_headcount
    }

    pub fn max_headcount(&self) -> u32 {
        self.max_headcount
    }

    /// True for the OFF shift.
    #[inline]
    pub fn is_rest(&self) -> bool {
        self.rest
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shift_id{}", self.id)
    }
}

/// An ordered (previous block shift -> current block shift) pair that must
/// not occur across a cycle boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    pub previous: usize,
    pub current: usize,
}

/// The fixed, ordered set of shifts plus the forbidden transition table.
///
/// # Example
///
/// ```
/// use shiftforge_core::domain::{Shift, ShiftCatalog};
///
/// let catalog = ShiftCatalog::new(vec![
///     Shift::new("O", "Off", 1, 2).as_rest(),
///     Shift::new("D", "Day", 1, 2),
///     Shift::new("N", "Night", 1, 2),
/// ])
/// .unwrap()
/// .forbid_transition("N", "N")
/// .unwrap();
///
/// assert_eq!(catalog.off().id(), "O");
/// assert!(catalog.is_forbidden(2, 2));
/// assert!(!catalog.is_forbidden(1, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftCatalog {
    shifts: Vec<Shift>,
    off: usize,
    forbidden_transitions: Vec<Transition>,
}

impl ShiftCatalog {
    /// Builds a catalog, assigning indices in the given order.
    ///
    /// Requires unique ids, `min_headcount <= max_headcount` and exactly one
    /// rest shift.
    pub fn new(shifts: Vec<Shift>) -> Result<Self> {
        if shifts.is_empty() {
            return Err(ShiftForgeError::InvalidCatalog(
                "shift catalog is empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for shift in &shifts {
            if !seen.insert(shift.id.as_str()) {
                return Err(ShiftForgeError::InvalidCatalog(format!(
                    "duplicate shift id '{}'",
                    shift.id
                )));
            }
            if shift.min_headcount > shift.max_headcount {
                return Err(ShiftForgeError::InvalidCatalog(format!(
                    "shift '{}' has min headcount {} above max headcount {}",
                    shift.id, shift.min_headcount, shift.max_headcount
                )));
            }
        }

        let rest: Vec<usize> = shifts
            .iter()
            .enumerate()
            .filter(|(_, s)| s.rest)
            .map(|(i, _)| i)
            .collect();
        let off = match rest.as_slice() {
            [off] => *off,
            _ => {
                return Err(ShiftForgeError::InvalidCatalog(format!(
                    "shift catalog needs exactly one rest shift, found {}",
                    rest.len()
                )))
            }
        };

        let shifts = shifts
            .into_iter()
            .enumerate()
            .map(|(index, shift)| Shift { index, ..shift })
            .collect();

        Ok(Self {
            shifts,
            off,
            forbidden_transitions: Vec::new(),
        })
    }

    /// Appends a forbidden (previous -> current) transition by shift id.
    ///
    /// Table order is preserved; the transition penalty walks it in order.
    pub fn forbid_transition(mut self, previous: &str, current: &str) -> Result<Self> {
        let transition = Transition {
            previous: self.by_id(previous)?.index,
            current: self.by_id(current)?.index,
        };
        self.forbidden_transitions.push(transition);
        Ok(self)
    }

    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Always false: construction rejects empty catalogs.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Looks up a shift by catalog index.
    pub fn shift(&self, index: usize) -> Result<&Shift> {
        self.shifts.get(index).ok_or(ShiftForgeError::IndexOutOfRange {
            kind: "shift",
            index,
            len: self.shifts.len(),
        })
    }

    /// Looks up a shift by id.
    pub fn by_id(&self, id: &str) -> Result<&Shift> {
        self.shifts
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| ShiftForgeError::UnknownId {
                kind: "shift",
                id: id.to_string(),
            })
    }

    /// The rest (OFF) shift.
    pub fn off(&self) -> &Shift {
        &self.shifts[self.off]
    }

    #[inline]
    pub fn off_index(&self) -> usize {
        self.off
    }

    /// Every shift except OFF, in catalog order.
    pub fn work_shifts(&self) -> impl Iterator<Item = &Shift> {
        self.shifts.iter().filter(|s| !s.rest)
    }

    pub fn forbidden_transitions(&self) -> &[Transition] {
        &self.forbidden_transitions
    }

    /// Shifts that may not follow a block of `previous`.
    pub fn forbidden_successors(&self, previous: usize) -> impl Iterator<Item = usize> + '_ {
        self.forbidden_transitions
            .iter()
            .filter(move |t| t.previous == previous)
            .map(|t| t.current)
    }

    pub fn is_forbidden(&self, previous: usize, current: usize) -> bool {
        self.forbidden_transitions
            .iter()
            .any(|t| t.previous == previous && t.current == current)
    }
}
