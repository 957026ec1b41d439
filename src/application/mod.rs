mod automaton;
mod config;
mod driver;

pub use automaton::Automaton;
pub use config::{AutomatonKind, ConfigError, SimulationConfig};
pub use driver::{Driver, MAX_UPDATES_PER_SECOND, MIN_UPDATES_PER_SECOND};
