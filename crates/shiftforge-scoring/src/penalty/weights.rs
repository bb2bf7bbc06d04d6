// Runtime penalty weighting.
//
// The aggregate score of a schedule is a weighted sum of its seven penalty
// counts. Weights can be changed between evaluations without touching the
// rule code.

use std::fmt;

use shiftforge_core::{PenaltyKind, SimpleScore};

use super::Penalties;

// One weight per penalty kind, indexed in p1..p7 order.
//
// Unset kinds weigh zero, so an empty weighting ignores every rule.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PenaltyWeights {
    weights: [i64; PenaltyKind::COUNT],
}

impl fmt::Debug for PenaltyWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (kind, weight) in self.iter().filter(|(_, w)| *w != 0) {
            map.entry(&kind.name(), &weight);
        }
        map.finish()
    }
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self::reference()
    }
}

impl PenaltyWeights {
    // All weights zero.
    pub const fn zero() -> Self {
        Self {
            weights: [0; PenaltyKind::COUNT],
        }
    }

    // Every rule weighs `weight`.
    pub const fn uniform(weight: i64) -> Self {
        Self {
            weights: [weight; PenaltyKind::COUNT],
        }
    }

    // The established objective: off-on-work-day plus cycle uniformity.
    pub fn reference() -> Self {
        Self::zero()
            .with(PenaltyKind::OffOnWorkDay, 1)
            .with(PenaltyKind::CycleUniformity, 1)
    }

    // Creates weights from (kind, weight) pairs; later pairs win.
    pub fn from_pairs<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (PenaltyKind, i64)>,
    {
        let mut weights = Self::zero();
        for (kind, weight) in iter {
            weights.put(kind, weight);
        }
        weights
    }

    // Sets the weight for a penalty.
    pub fn put(&mut self, kind: PenaltyKind, weight: i64) {
        self.weights[kind.index()] = weight;
    }

    pub fn with(mut self, kind: PenaltyKind, weight: i64) -> Self {
        self.put(kind, weight);
        self
    }

    pub fn get(&self, kind: PenaltyKind) -> i64 {
        self.weights[kind.index()]
    }

    // Returns true if the penalty contributes to the aggregate.
    pub fn is_active(&self, kind: PenaltyKind) -> bool {
        self.get(kind) != 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (PenaltyKind, i64)> + '_ {
        PenaltyKind::ALL.iter().map(move |&k| (k, self.get(k)))
    }

    // Weighted sum of a penalty vector, saturating at the i64 bounds.
    pub fn total(&self, penalties: &Penalties) -> i64 {
        penalties
            .iter()
            .map(|(kind, count)| self.weighted(kind, count))
            .fold(0i64, i64::saturating_add)
    }

    // Weighted contribution of a single penalty count as a score.
    pub fn score_of(&self, kind: PenaltyKind, count: u64) -> SimpleScore {
        SimpleScore::of_penalty(self.weighted(kind, count))
    }

    fn weighted(&self, kind: PenaltyKind, count: u64) -> i64 {
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        self.get(kind).saturating_mul(count)
    }
}
