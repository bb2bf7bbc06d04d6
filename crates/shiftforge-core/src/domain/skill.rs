//! Capability flags gating shifts.

/// A capability and the shift it unlocks.
///
/// Lacking the capability makes `gates` permanently forbidden for the
/// employee, independent of the day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Capability {
    name: String,
    gates: usize,
}

impl Capability {
    /// `gates` is the index of the gated shift in the shift catalog.
    pub fn new(name: impl Into<String>, gates: usize) -> Self {
        Self {
            name: name.into(),
            gates,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index of the gated shift.
    pub fn gates(&self) -> usize {
        self.gates
    }
}

/// One employee's capability flags.
///
/// # Example
///
/// ```
/// use shiftforge_core::domain::{Capability, Skill};
///
/// let split = Capability::new("a", 3);
/// let night = Capability::new("b", 2);
///
/// let skill = Skill::new().with_flag(&split, false).with_flag(&night, true);
/// assert_eq!(skill.forbidden_shifts(), vec![3]);
///
/// let none = Skill::new().with_flag(&split, false).with_flag(&night, false);
/// assert_eq!(none.forbidden_shifts(), vec![3, 2]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Skill {
    flags: Vec<(Capability, bool)>,
}

impl Skill {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records whether the employee holds `capability`.
    pub fn with_flag(mut self, capability: &Capability, held: bool) -> Self {
        self.flags.push((capability.clone(), held));
        self
    }

    /// Returns the flag for a capability name, if recorded.
    pub fn has(&self, capability: &str) -> Option<bool> {
        self.flags
            .iter()
            .find(|(c, _)| c.name == capability)
            .map(|(_, held)| *held)
    }

    /// Shift indices gated by missing capabilities, in flag order.
    pub fn forbidden_shifts(&self) -> Vec<usize> {
        self.flags
            .iter()
            .filter(|(_, held)| !held)
            .map(|(c, _)| c.gates)
            .collect()
    }

    /// True when a missing capability gates `shift`.
    pub fn forbids(&self, shift: usize) -> bool {
        self.flags.iter().any(|(c, held)| !held && c.gates == shift)
    }

    /// Capabilities with their flags, in recording order.
    pub fn flags(&self) -> impl Iterator<Item = (&Capability, bool)> {
        self.flags.iter().map(|(c, held)| (c, *held))
    }
}
