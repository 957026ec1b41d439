use thiserror::Error;

/// Precondition violations detected when an engine or grid is built or seeded.
/// None of these are retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: isize, height: isize },

    #[error("rule index {0} is outside 0..=255")]
    RuleIndexOutOfRange(i64),

    #[error("starting state is {found_width}x{found_height} but the grid is {width}x{height}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        found_width: usize,
        found_height: usize,
    },

    #[error("cell value must be 0 or 1, got {0}")]
    InvalidCellValue(u8),
}

pub type Result<T, E = AutomatonError> = std::result::Result<T, E>;
