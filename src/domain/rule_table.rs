//! Elementary (one-dimensional, radius 1) rule tables.
//!
//! A rule index in 0..=255 is read as eight bits, most significant first,
//! and each bit becomes the output for the neighborhood at the same position
//! in [`PATTERNS`].

use super::{AutomatonError, Cell, Result};

/// The eight three-cell neighborhoods in table order: `111, 110, ..., 000`.
pub const PATTERNS: [[u8; 3]; 8] = [
    [1, 1, 1],
    [1, 1, 0],
    [1, 0, 1],
    [1, 0, 0],
    [0, 1, 1],
    [0, 1, 0],
    [0, 0, 1],
    [0, 0, 0],
];

/// Total mapping from every three-cell neighborhood to an output cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleTable {
    index: u8,
    outputs: [Cell; 8],
}

impl RuleTable {
    /// Derive the table for a rule index, rejecting anything outside 0..=255
    pub fn new(index: i64) -> Result<Self> {
        u8::try_from(index)
            .map(Self::from)
            .map_err(|_| AutomatonError::RuleIndexOutOfRange(index))
    }

    /// Rule index this table was derived from
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Outputs in pattern order, equal to the index's bits MSB first
    pub const fn outputs(&self) -> [Cell; 8] {
        self.outputs
    }

    /// Output for the window (left, center, right)
    #[inline]
    pub fn output(&self, left: Cell, center: Cell, right: Cell) -> Cell {
        let pattern = (left.as_u8() << 2) | (center.as_u8() << 1) | right.as_u8();
        // PATTERNS is listed from 111 down to 000
        self.outputs[7 - pattern as usize]
    }
}

impl From<u8> for RuleTable {
    fn from(index: u8) -> Self {
        let outputs = std::array::from_fn(|i| Cell::from((index >> (7 - i)) & 1 == 1));
        Self { index, outputs }
    }
}
