//! A loaded rostering problem: catalog, weighting and random seed.

use std::path::Path;

use rand::Rng;
use tracing::info;

use shiftforge_config::{ConfigError, ShiftForgeConfig};
use shiftforge_core::{Catalog, Result, Schedule};
use shiftforge_scoring::{ConstraintEvaluator, Evaluation, PenaltyWeights, ScoreExplanation};
use shiftforge_seed::{random_uniform_schedule, seeded_rng, SeedGenerator, SeedRng};

/// Everything an outer search loop needs: built once from configuration,
/// then borrowed by every evaluation and seed.
#[derive(Debug, Clone)]
pub struct RosterProblem {
    config: ShiftForgeConfig,
    catalog: Catalog,
    weights: PenaltyWeights,
}

impl RosterProblem {
    /// Builds the catalog and weighting described by `config`.
    pub fn from_config(config: ShiftForgeConfig) -> std::result::Result<Self, ConfigError> {
        let catalog = config.build_catalog()?;
        let weights = PenaltyWeights::from_pairs(config.penalty_weights()?);

        info!(
            event = "problem_loaded",
            employees = catalog.n_employees(),
            days = catalog.n_days(),
            shifts = catalog.n_shifts(),
            conditions = catalog.n_conditions(),
        );

        Ok(Self {
            config,
            catalog,
            weights,
        })
    }

    /// Loads a TOML or YAML configuration file.
    pub fn load(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
        Self::from_config(ShiftForgeConfig::load(path)?)
    }

    /// The reference roster: 9 employees over 14 days.
    pub fn reference() -> std::result::Result<Self, ConfigError> {
        Self::from_config(ShiftForgeConfig::reference())
    }

    /// Replaces the weighting from configuration.
    pub fn with_weights(mut self, weights: PenaltyWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn config(&self) -> &ShiftForgeConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn weights(&self) -> &PenaltyWeights {
        &self.weights
    }

    /// Expected length of a flat schedule sequence.
    pub fn schedule_len(&self) -> usize {
        self.catalog.n_conditions()
    }

    /// Validates a flat sequence against the catalog.
    pub fn schedule(&self, cells: Vec<usize>) -> Result<Schedule> {
        Schedule::from_flat(&self.catalog, cells)
    }

    pub fn evaluator(&self) -> ConstraintEvaluator<'_> {
        ConstraintEvaluator::new(&self.catalog).with_weights(self.weights)
    }

    /// Scores a flat shift-index sequence.
    pub fn evaluate(&self, cells: &[usize]) -> Result<Evaluation> {
        self.evaluator().evaluate_flat(cells)
    }

    /// Scores and explains a flat shift-index sequence.
    pub fn explain(&self, cells: &[usize]) -> Result<ScoreExplanation> {
        let schedule = self.schedule(cells.to_vec())?;
        self.evaluator().explain(&schedule)
    }

    /// Scores a population in parallel; fails on the first malformed member.
    pub fn evaluate_batch<C: AsRef<[usize]>>(&self, population: &[C]) -> Result<Vec<Evaluation>> {
        let schedules = population
            .iter()
            .map(|cells| self.schedule(cells.as_ref().to_vec()))
            .collect::<Result<Vec<_>>>()?;
        self.evaluator().evaluate_batch(&schedules)
    }

    pub fn seed_generator(&self) -> SeedGenerator<'_> {
        SeedGenerator::new(&self.catalog)
    }

    /// A block-stable seed as a flat sequence.
    pub fn generate_seed<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<usize>> {
        self.seed_generator().generate(rng)
    }

    /// A schedule drawn uniformly over every shift.
    pub fn random_schedule<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<usize>> {
        Ok(random_uniform_schedule(&self.catalog, rng)?.into_flat())
    }

    /// A random source seeded from `random_seed`, or from the OS when the
    /// configuration leaves it unset.
    pub fn rng(&self) -> SeedRng {
        seeded_rng(self.config.random_seed)
    }
}
