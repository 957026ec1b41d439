use log::{debug, info, trace};

use super::{Cell, Grid, Result, RuleTable};

/// One-dimensional elementary automaton drawn as a 2D history.
///
/// Row 0 holds the starting row and every tick appends the next generation
/// one row further down, until the last row of the grid has been written.
/// The row boundary is open: cells past either end read as dead.
#[derive(Clone, Debug)]
pub struct ElementaryEngine {
    grid: Grid,
    rule: RuleTable,
    current_row: usize,
}

/// Compute the row following `row` under `rule`, padding both ends with a
/// dead cell.
pub fn step_row(row: &[Cell], rule: &RuleTable) -> Vec<Cell> {
    let mut next = vec![Cell::Dead; row.len()];
    step_row_into(row, rule, &mut next);
    next
}

fn step_row_into(row: &[Cell], rule: &RuleTable, out: &mut [Cell]) {
    debug_assert_eq!(row.len(), out.len());
    let at = |i: isize| {
        usize::try_from(i)
            .ok()
            .and_then(|i| row.get(i).copied())
            .unwrap_or(Cell::Dead)
    };
    for (i, cell) in out.iter_mut().enumerate() {
        let i = i as isize;
        *cell = rule.output(at(i - 1), at(i), at(i + 1));
    }
}

impl ElementaryEngine {
    /// Create an engine with a dead grid. Call `set_starting_state` (or use
    /// `with_state`) before the first tick.
    pub fn new(width: isize, height: isize, rule: i64) -> Result<Self> {
        let grid = Grid::new(width, height)?;
        let rule = RuleTable::new(rule)?;
        debug!(
            "Created {}x{} elementary engine with rule {}",
            grid.width(),
            grid.height(),
            rule.index()
        );
        Ok(Self { grid, rule, current_row: 0 })
    }

    /// Create an engine whose canvas is pre-seeded with the given rows.
    /// The cursor starts at row 0.
    pub fn with_state(width: isize, height: isize, rule: i64, rows: &[Vec<Cell>]) -> Result<Self> {
        let grid = Grid::from_rows(width, height, rows)?;
        let rule = RuleTable::new(rule)?;
        Ok(Self { grid, rule, current_row: 0 })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn rule(&self) -> &RuleTable {
        &self.rule
    }

    /// Switch to another rule. The canvas and cursor are left as they are.
    pub fn set_rule(&mut self, rule: i64) -> Result<()> {
        self.rule = RuleTable::new(rule)?;
        debug!("Elementary engine switched to rule {}", self.rule.index());
        Ok(())
    }

    /// Index of the most recently written row
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    /// True once the last row of the grid has been written
    pub fn is_finished(&self) -> bool {
        self.current_row + 1 >= self.grid.height()
    }

    /// Clear the canvas, seed the middle cell of row 0, rewind the cursor
    pub fn set_starting_state(&mut self) {
        self.grid.clear();
        self.grid.set(self.grid.width() / 2, 0, Cell::Alive);
        self.current_row = 0;
    }

    /// Read row N, advance the cursor to N + 1 and write the next
    /// generation there. A no-op once the last row has been written.
    pub fn tick(&mut self) {
        if self.is_finished() {
            return;
        }
        let width = self.grid.width();
        let source = self.current_row;
        self.current_row += 1;

        // Rows N and N + 1 are adjacent in the buffer
        let (head, tail) = self.grid.cells_mut().split_at_mut(self.current_row * width);
        step_row_into(&head[source * width..], &self.rule, &mut tail[..width]);

        trace!("Elementary row {} written", self.current_row);
        if self.is_finished() {
            info!(
                "Rule {} filled all {} rows",
                self.rule.index(),
                self.grid.height()
            );
        }
    }
}
