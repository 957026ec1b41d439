//! Simulation configuration: which automaton, its size and rule, and how
//! fast the driver ticks it. Loaded from JSON; every field has a default.

use std::{fs, path::Path, time::Duration};

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Algorithm, AutomatonError, ElementaryEngine, LifeEngine, Pattern};

pub const DEFAULT_WIDTH: isize = 50;
pub const DEFAULT_HEIGHT: isize = 50;
pub const DEFAULT_RULE: i64 = 22;
pub const DEFAULT_TICK_MILLIS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),

    #[error(transparent)]
    Automaton(#[from] AutomatonError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutomatonKind {
    Life,
    #[default]
    Elementary,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub kind: AutomatonKind,
    pub width: isize,
    pub height: isize,
    /// Elementary rule index, 0..=255
    pub rule: i64,
    pub tick_millis: u64,
    pub max_generations: Option<u64>,
    /// Seed for Life's random starting state
    pub seed: Option<u64>,
    /// Life preset placed in the middle instead of a random start
    pub pattern: Option<String>,
    pub algorithm: Algorithm,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            kind: AutomatonKind::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            rule: DEFAULT_RULE,
            tick_millis: DEFAULT_TICK_MILLIS,
            max_generations: None,
            seed: None,
            pattern: None,
            algorithm: Algorithm::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Time between two ticks, used as-is by the driver
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    /// Build a seeded Life engine: the named pattern centered if one is
    /// given, a random half-full grid otherwise
    pub fn build_life(&self) -> Result<LifeEngine, ConfigError> {
        let mut engine =
            LifeEngine::new(self.width, self.height)?.with_algorithm(self.algorithm);

        match &self.pattern {
            Some(name) => {
                let pattern = Pattern::by_name(name)
                    .ok_or_else(|| ConfigError::UnknownPattern(name.clone()))?;
                let (width, height) = engine.current().dimensions();
                let x = width.saturating_sub(pattern.width) / 2;
                let y = height.saturating_sub(pattern.height) / 2;
                engine.place(&pattern, x, y);
            }
            None => match self.seed {
                Some(seed) => engine.randomize_with(&mut StdRng::seed_from_u64(seed)),
                None => engine.randomize(),
            },
        }
        Ok(engine)
    }

    /// Build an elementary engine in its starting state
    pub fn build_elementary(&self) -> Result<ElementaryEngine, ConfigError> {
        let mut engine = ElementaryEngine::new(self.width, self.height, self.rule)?;
        engine.set_starting_state();
        Ok(engine)
    }
}
