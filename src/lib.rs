// Domain layer - grid storage and the two automaton engines
pub mod domain;

// Application layer - driver loop and configuration
pub mod application;

// Re-exports for convenience
pub use domain::{
    Algorithm, AutomatonError, Cell, ElementaryEngine, Grid, LifeEngine, Pattern, RuleTable,
    presets,
};
pub use application::{Automaton, AutomatonKind, Driver, SimulationConfig};
