//! Penalty identification.
//!
//! The evaluator computes seven independent penalty counts. `PenaltyKind`
//! names them so weights, explanations and configuration can refer to a
//! penalty without stringly-typed lookups.

use std::fmt;
use std::str::FromStr;

use crate::error::ShiftForgeError;

/// One of the seven schedule penalties, in evaluation order (p1..p7).
///
/// # Example
///
/// ```
/// use shiftforge_core::PenaltyKind;
///
/// let kind: PenaltyKind = "cycle_uniformity".parse().unwrap();
/// assert_eq!(kind, PenaltyKind::CycleUniformity);
/// assert_eq!(kind.number(), 4);
/// assert!("no_such_rule".parse::<PenaltyKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PenaltyKind {
    /// OFF assigned on a work day.
    OffOnWorkDay,
    /// Skill-forbidden shift assigned on a work day.
    SkillViolation,
    /// Non-OFF shift assigned on a rest day.
    ShiftOnRestDay,
    /// More than one distinct shift inside a work block.
    CycleUniformity,
    /// Forbidden shift transition between consecutive blocks.
    TransitionViolation,
    /// Headcount outside a shift's bounds on a weekday.
    HeadcountMismatch,
    /// Work-to-rest window without a single OFF.
    MissingRest,
}

impl PenaltyKind {
    /// All kinds in p1..p7 order.
    pub const ALL: [PenaltyKind; 7] = [
        PenaltyKind::OffOnWorkDay,
        PenaltyKind::SkillViolation,
        PenaltyKind::ShiftOnRestDay,
        PenaltyKind::CycleUniformity,
        PenaltyKind::TransitionViolation,
        PenaltyKind::HeadcountMismatch,
        PenaltyKind::MissingRest,
    ];

    /// Number of penalty kinds.
    pub const COUNT: usize = 7;

    /// Zero-based position in p1..p7 order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// One-based penalty number (`p1` .. `p7`).
    pub const fn number(self) -> usize {
        self as usize + 1
    }

    /// Configuration name of this penalty.
    pub const fn name(self) -> &'static str {
        match self {
            PenaltyKind::OffOnWorkDay => "off_on_work_day",
            PenaltyKind::SkillViolation => "skill_violation",
            PenaltyKind::ShiftOnRestDay => "shift_on_rest_day",
            PenaltyKind::CycleUniformity => "cycle_uniformity",
            PenaltyKind::TransitionViolation => "transition_violation",
            PenaltyKind::HeadcountMismatch => "headcount_mismatch",
            PenaltyKind::MissingRest => "missing_rest",
        }
    }

    /// Human-readable description.
    pub const fn description(self) -> &'static str {
        match self {
            PenaltyKind::OffOnWorkDay => "OFF assigned on a work day",
            PenaltyKind::SkillViolation => "shift assigned without the required skill",
            PenaltyKind::ShiftOnRestDay => "shift assigned on a rest day",
            PenaltyKind::CycleUniformity => "mixed shifts within one work block",
            PenaltyKind::TransitionViolation => "forbidden shift transition between blocks",
            PenaltyKind::HeadcountMismatch => "headcount outside shift bounds",
            PenaltyKind::MissingRest => "work cycle without a rest day",
        }
    }
}

impl fmt::Display for PenaltyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PenaltyKind {
    type Err = ShiftForgeError;

    /// Accepts the configuration name or the `pN` shorthand.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PenaltyKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s || format!("p{}", kind.number()) == s)
            .ok_or_else(|| ShiftForgeError::UnknownPenalty(s.to_string()))
    }
}
