mod algorithm;
mod cell;
mod elementary;
mod error;
mod grid;
mod life;
mod patterns;
mod rule_table;

pub use algorithm::Algorithm;
pub use cell::Cell;
pub use elementary::{ElementaryEngine, step_row};
pub use error::{AutomatonError, Result};
pub use grid::Grid;
pub use life::LifeEngine;
pub use patterns::{Pattern, presets};
pub use rule_table::{PATTERNS, RuleTable};
