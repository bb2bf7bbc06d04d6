//! Configuration system for ShiftForge.
//!
//! Load the roster catalog (horizon, shifts, transitions, capabilities,
//! employees) and the penalty weighting from TOML or YAML, so a new roster
//! needs no code changes.
//!
//! Every top-level section is optional: a missing section falls back to the
//! reference roster (14 days from 2024-04-01, shifts O/D/N/S, nine
//! employees on a 5-on/2-off cycle).
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use shiftforge_config::ShiftForgeConfig;
//!
//! let config = ShiftForgeConfig::from_toml_str(r#"
//!     random_seed = 7
//!
//!     [horizon]
//!     start = "2024-04-01"
//!     days = 7
//!
//!     [weights]
//!     off_on_work_day = 1
//!     headcount_mismatch = 2
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, Some(7));
//! let catalog = config.build_catalog().unwrap();
//! assert_eq!(catalog.n_days(), 7);
//! assert_eq!(catalog.n_employees(), 9); // reference roster
//! ```
//!
//! Use the reference roster when the file is missing:
//!
//! ```
//! use shiftforge_config::ShiftForgeConfig;
//!
//! let config = ShiftForgeConfig::load("shiftforge.toml").unwrap_or_default();
//! assert!(config.build_catalog().is_ok());
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use shiftforge_core::{
    Capability, Catalog, Employee, Horizon, PenaltyKind, Shift, ShiftCatalog, ShiftForgeError,
    Skill, WorkCycle,
};


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Catalog(#[from] ShiftForgeError),
}

/// Main roster configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ShiftForgeConfig {
    /// Random seed for reproducible seed schedules.
    pub random_seed: Option<u64>,

    /// Planning horizon.
    pub horizon: HorizonConfig,

    /// Shift catalog, in index order.
    pub shifts: Vec<ShiftConfig>,

    /// Ordered forbidden (previous -> current) block transitions.
    pub forbidden_transitions: Vec<TransitionConfig>,

    /// Capabilities and the shift each one unlocks.
    pub capabilities: Vec<CapabilityConfig>,

    /// Roster, in index order.
    pub employees: Vec<EmployeeConfig>,

    /// Penalty weights by penalty name (`off_on_work_day`, ... or `p1`..`p7`).
    pub weights: BTreeMap<String, i64>,
}

impl Default for ShiftForgeConfig {
    fn default() -> Self {
        Self::reference()
    }
}

impl ShiftForgeConfig {
    /// Creates the reference configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, YAML for `.yaml`/`.yml`, TOML
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        info!(path = %path.display(), "Loading roster configuration");
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        info!(path = %path.display(), "Loading roster configuration");
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the weight of one penalty.
    pub fn with_weight(mut self, kind: PenaltyKind, weight: i64) -> Self {
        self.weights
            .retain(|name, _| name.parse::<PenaltyKind>().map_or(true, |k| k != kind));
        self.weights.insert(kind.name().to_string(), weight);
        self
    }

    /// The reference roster: 14 days from 2024-04-01, shifts O/D/N/S with
    /// headcount 1..=2, forbidden N->N, N->S, S->N, capability `a` gating
    /// S and `b` gating N, nine fully skilled employees on a 5-on/2-off
    /// cycle starting 2024-04-01, weighted by the reference objective
    /// (`off_on_work_day + cycle_uniformity`).
    pub fn reference() -> Self {
        let start = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap_or_default();

        let shifts = vec![
            ShiftConfig::rest("O", "Off", 1, 2),
            ShiftConfig::work("D", "Day", 1, 2),
            ShiftConfig::work("N", "Night", 1, 2),
            ShiftConfig::work("S", "Split", 1, 2),
        ];

        let forbidden_transitions = [("N", "N"), ("N", "S"), ("S", "N")]
            .into_iter()
            .map(|(previous, current)| TransitionConfig {
                previous: previous.to_string(),
                current: current.to_string(),
            })
            .collect();

        let capabilities = vec![
            CapabilityConfig {
                name: "a".to_string(),
                gates: "S".to_string(),
            },
            CapabilityConfig {
                name: "b".to_string(),
                gates: "N".to_string(),
            },
        ];

        let employees = ["a", "b", "c", "d", "e", "f", "g", "h", "i"]
            .into_iter()
            .map(|id| EmployeeConfig {
                id: id.to_string(),
                label: Some(id.to_uppercase()),
                work_days: 5,
                cycle_start: start,
                skills: vec!["a".to_string(), "b".to_string()],
                forbidden_shifts: Vec::new(),
                holidays: Vec::new(),
            })
            .collect();

        let weights = [PenaltyKind::OffOnWorkDay, PenaltyKind::CycleUniformity]
            .into_iter()
            .map(|kind| (kind.name().to_string(), 1))
            .collect();

        Self {
            random_seed: None,
            horizon: HorizonConfig { start, days: 14 },
            shifts,
            forbidden_transitions,
            capabilities,
            employees,
            weights,
        }
    }

    /// Builds and validates the immutable catalog.
    pub fn build_catalog(&self) -> Result<Catalog, ConfigError> {
        let horizon = Horizon::new(self.horizon.start, self.horizon.days)?;

        let shifts = self
            .shifts
            .iter()
            .map(|s| {
                let shift = Shift::new(&s.id, s.label(), s.min_headcount, s.max_headcount);
                if s.rest {
                    shift.as_rest()
                } else {
                    shift
                }
            })
            .collect();
        let mut shift_catalog = ShiftCatalog::new(shifts)?;
        for t in &self.forbidden_transitions {
            shift_catalog = shift_catalog.forbid_transition(&t.previous, &t.current)?;
        }

        let mut capabilities: Vec<Capability> = Vec::with_capacity(self.capabilities.len());
        for c in &self.capabilities {
            if capabilities.iter().any(|known| known.name() == c.name) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate capability '{}'",
                    c.name
                )));
            }
            let gates = shift_catalog.by_id(&c.gates)?.index();
            capabilities.push(Capability::new(&c.name, gates));
        }

        let mut employees = Vec::with_capacity(self.employees.len());
        for e in &self.employees {
            if let Some(unknown) = e
                .skills
                .iter()
                .find(|s| !capabilities.iter().any(|c| c.name() == s.as_str()))
            {
                return Err(ConfigError::Invalid(format!(
                    "employee '{}' lists unknown capability '{}'",
                    e.id, unknown
                )));
            }

            let skill = capabilities.iter().fold(Skill::new(), |skill, c| {
                let held = e.skills.iter().any(|s| s == c.name());
                skill.with_flag(c, held)
            });

            let forbidden = e
                .forbidden_shifts
                .iter()
                .map(|id| shift_catalog.by_id(id).map(Shift::index))
                .collect::<Result<Vec<_>, _>>()?;

            let cycle = WorkCycle::new(e.work_days, e.cycle_start)?;
            employees.push(
                Employee::new(&e.id, e.label(), skill, cycle)
                    .with_forbidden_shifts(forbidden)
                    .with_holidays(e.holidays.iter().copied()),
            );
        }

        let catalog = Catalog::new(horizon, shift_catalog, employees)?;
        debug!(
            days = catalog.n_days(),
            shifts = catalog.n_shifts(),
            employees = catalog.n_employees(),
            "Built roster catalog"
        );
        Ok(catalog)
    }

    /// Resolves the `weights` table into penalty kinds.
    ///
    /// Unlisted penalties are absent from the result; callers decide their
    /// default weight. A penalty listed under both its name and its `pN`
    /// alias is rejected.
    pub fn penalty_weights(&self) -> Result<Vec<(PenaltyKind, i64)>, ConfigError> {
        let mut resolved: Vec<(PenaltyKind, i64)> = Vec::with_capacity(self.weights.len());
        for (name, weight) in &self.weights {
            let kind = name.parse::<PenaltyKind>()?;
            if resolved.iter().any(|(known, _)| *known == kind) {
                return Err(ConfigError::Invalid(format!(
                    "penalty '{}' is weighted more than once",
                    kind.name()
                )));
            }
            resolved.push((kind, *weight));
        }
        Ok(resolved)
    }
}

/// Planning horizon configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HorizonConfig {
    /// First date of the horizon.
    pub start: NaiveDate,

    /// Number of consecutive days.
    pub days: usize,
}

/// One shift kind.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ShiftConfig {
    pub id: String,

    /// Display label; defaults to the id.
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub min_headcount: u32,

    #[serde(default = "default_max_headcount")]
    pub max_headcount: u32,

    /// Marks the OFF shift. Exactly one shift must set this.
    #[serde(default)]
    pub rest: bool,
}

fn default_max_headcount() -> u32 {
    u32::MAX
}

impl ShiftConfig {
    pub fn work(id: &str, label: &str, min_headcount: u32, max_headcount: u32) -> Self {
        Self {
            id: id.to_string(),
            label: Some(label.to_string()),
            min_headcount,
            max_headcount,
            rest: false,
        }
    }

    pub fn rest(id: &str, label: &str, min_headcount: u32, max_headcount: u32) -> Self {
        Self {
            rest: true,
            ..Self::work(id, label, min_headcount, max_headcount)
        }
    }

    fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

/// A forbidden block transition, by shift id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TransitionConfig {
    pub previous: String,
    pub current: String,
}

/// A capability and the id of the shift it unlocks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CapabilityConfig {
    pub name: String,
    pub gates: String,
}

/// One roster member.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EmployeeConfig {
    pub id: String,

    /// Display label; defaults to the id.
    #[serde(default)]
    pub label: Option<String>,

    /// Work days per cycle (two rest days follow).
    pub work_days: u32,

    /// Anchor date of the work cycle.
    pub cycle_start: NaiveDate,

    /// Capabilities held; every other capability is missing.
    #[serde(default)]
    pub skills: Vec<String>,

    /// Shift ids this employee may never work.
    #[serde(default)]
    pub forbidden_shifts: Vec<String>,

    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
}

impl EmployeeConfig {
    fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}
