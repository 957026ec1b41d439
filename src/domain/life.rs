use log::{debug, trace};
use rand::Rng;
use rayon::prelude::*;

use super::{Algorithm, Cell, Grid, Pattern, Result};

/// Two-dimensional Game of Life over a toroidal grid.
///
/// Two buffers of identical shape are owned for the engine's lifetime. Each
/// tick fills the inactive buffer from the active one and then flips which
/// buffer is active, so a generation is always computed from a stable
/// snapshot and nothing is allocated while ticking.
#[derive(Clone, Debug)]
pub struct LifeEngine {
    buffers: [Grid; 2],
    active: usize,
    algorithm: Algorithm,
    generation: u64,
}

/// Next state of (x, y) given the current generation
fn next_state(current: &Grid, x: usize, y: usize) -> Cell {
    current
        .get(x as isize, y as isize)
        .evolve(count_neighbors_in(current, x, y))
}

fn count_neighbors_in(grid: &Grid, x: usize, y: usize) -> u8 {
    let (x, y) = (x as isize, y as isize);
    (-1..=1)
        .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
        .filter(|&(dx, dy)| dx != 0 || dy != 0)
        .filter(|&(dx, dy)| grid.get(x + dx, y + dy).is_alive())
        .count() as u8
}

fn fill_row(current: &Grid, y: usize, row: &mut [Cell]) {
    for (x, cell) in row.iter_mut().enumerate() {
        *cell = next_state(current, x, y);
    }
}

impl LifeEngine {
    /// Create an engine with both buffers dead
    pub fn new(width: isize, height: isize) -> Result<Self> {
        let grid = Grid::new(width, height)?;
        debug!("Created {}x{} Life engine", grid.width(), grid.height());
        Ok(Self::from_grid(grid))
    }

    /// Create an engine whose first generation is the given rows
    pub fn with_state(width: isize, height: isize, rows: &[Vec<Cell>]) -> Result<Self> {
        let grid = Grid::from_rows(width, height, rows)?;
        debug!(
            "Created {}x{} Life engine with {} live cells",
            grid.width(),
            grid.height(),
            grid.population()
        );
        Ok(Self::from_grid(grid))
    }

    fn from_grid(current: Grid) -> Self {
        let mut next = current.clone();
        next.clear();
        Self {
            buffers: [current, next],
            active: 0,
            algorithm: Algorithm::default(),
            generation: 0,
        }
    }

    /// Select the algorithm used by `tick` (builder pattern)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The readable generation
    pub fn current(&self) -> &Grid {
        &self.buffers[self.active]
    }

    /// Mutable access to the readable generation, for seeding
    pub fn current_mut(&mut self) -> &mut Grid {
        &mut self.buffers[self.active]
    }

    /// Number of completed ticks
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Split into (current, next)
    fn buffers(&mut self) -> (&Grid, &mut Grid) {
        let [a, b] = &mut self.buffers;
        if self.active == 0 { (&*a, b) } else { (&*b, a) }
    }

    /// Live cells among the eight surrounding (x, y) in the current grid
    pub fn count_neighbors(&self, x: usize, y: usize) -> u8 {
        count_neighbors_in(self.current(), x, y)
    }

    /// Compute the next state of (x, y) into the next buffer.
    /// The current buffer is never written.
    pub fn apply_rules(&mut self, x: usize, y: usize) {
        let (current, next) = self.buffers();
        let cell = next_state(current, x, y);
        next.set(x, y, cell);
    }

    /// Advance one generation and make it readable
    pub fn tick(&mut self) {
        let algorithm = self.algorithm;
        let (current, next) = self.buffers();
        let width = current.width();

        match algorithm {
            Algorithm::Serial => next
                .cells_mut()
                .chunks_exact_mut(width)
                .enumerate()
                .for_each(|(y, row)| fill_row(current, y, row)),
            Algorithm::Parallel => next
                .cells_mut()
                .par_chunks_exact_mut(width)
                .enumerate()
                .for_each(|(y, row)| fill_row(current, y, row)),
        }

        self.active ^= 1;
        self.generation += 1;
        trace!("Life generation {}", self.generation);
    }

    /// Seed the current grid with roughly half the cells alive
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    /// Seed the current grid from the given random source
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.current_mut().fill_random(rng, 0.5);
        self.generation = 0;
    }

    /// Stamp a pattern onto the current grid with its top-left corner at
    /// (x, y). Cells past an edge wrap around.
    pub fn place(&mut self, pattern: &Pattern, x: usize, y: usize) {
        let grid = self.current_mut();
        let (width, height) = grid.dimensions();
        for (dx, dy) in &pattern.cells {
            grid.set((x + dx) % width, (y + dy) % height, Cell::Alive);
        }
    }
}
