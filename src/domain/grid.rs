use std::fmt;

use log::warn;
use rand::Rng;

use super::{AutomatonError, Cell, Result};

/// Grid is a fixed-size 2D cell array stored row-major in a flat buffer.
/// Reads wrap toroidally on both axes, writes must be in range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

/// Validate requested dimensions, rejecting zero and negative values and
/// shapes whose cell count does not fit in an `isize`
pub(crate) fn checked_dimensions(width: isize, height: isize) -> Result<(usize, usize)> {
    if width <= 0 || height <= 0 || width.checked_mul(height).is_none() {
        return Err(AutomatonError::InvalidDimension { width, height });
    }
    Ok((width as usize, height as usize))
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: isize, height: isize) -> Result<Self> {
        let (width, height) = checked_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Create a grid from a pre-seeded starting state given as rows.
    /// Every row must be exactly `width` cells and there must be `height` rows.
    pub fn from_rows(width: isize, height: isize, rows: &[Vec<Cell>]) -> Result<Self> {
        let mut grid = Self::new(width, height)?;
        let mismatch = rows.len() != grid.height
            || rows.iter().any(|row| row.len() != grid.width);
        if mismatch {
            let found_width = rows
                .iter()
                .map(Vec::len)
                .find(|&len| len != grid.width)
                .unwrap_or(grid.width);
            return Err(AutomatonError::DimensionMismatch {
                width: grid.width,
                height: grid.height,
                found_width,
                found_height: rows.len(),
            });
        }
        for (dst, src) in grid.cells.chunks_exact_mut(grid.width).zip(rows) {
            dst.copy_from_slice(src);
        }
        Ok(grid)
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Resolve any integer coordinate pair onto the torus
    fn wrap(&self, x: isize, y: isize) -> (usize, usize) {
        (
            x.rem_euclid(self.width as isize) as usize,
            y.rem_euclid(self.height as isize) as usize,
        )
    }

    /// Get the cell at (x, y). Out-of-range coordinates wrap around on both
    /// axes, so this is defined for every integer input.
    pub fn get(&self, x: isize, y: isize) -> Cell {
        let (x, y) = self.wrap(x, y);
        self.cells[self.get_index(x, y)]
    }

    /// Set the cell at (x, y). Writes do not wrap: an out-of-range
    /// coordinate is ignored.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        } else {
            warn!(
                "Ignoring write to ({}, {}) outside {}x{} grid",
                x, y, self.width, self.height
            );
        }
    }

    /// Borrow one row, or `None` if `y` is out of range
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        (y < self.height).then(|| {
            let start = self.get_index(0, y);
            &self.cells[start..start + self.width]
        })
    }

    /// Overwrite one row. Out-of-range rows are ignored like `set`; a row of
    /// the wrong length is rejected.
    pub fn set_row(&mut self, y: usize, content: &[Cell]) -> Result<()> {
        if content.len() != self.width {
            return Err(AutomatonError::DimensionMismatch {
                width: self.width,
                height: 1,
                found_width: content.len(),
                found_height: 1,
            });
        }
        if y >= self.height {
            warn!("Ignoring write to row {} of {}-row grid", y, self.height);
            return Ok(());
        }
        let start = self.get_index(0, y);
        self.cells[start..start + self.width].copy_from_slice(content);
        Ok(())
    }

    /// Mutable access to the whole buffer, row-major
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Set every cell independently alive with the given probability
    pub fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R, probability: f64) {
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(probability)));
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions in raster order
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (i % self.width, i / self.width, cell))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks_exact(self.width) {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.iter_cells().count(), 12);
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        for (w, h) in [(0, 5), (5, 0), (-1, 5), (5, -3), (0, 0)] {
            assert_eq!(
                Grid::new(w, h),
                Err(AutomatonError::InvalidDimension { width: w, height: h })
            );
        }
    }

    #[test]
    fn test_rejects_overflowing_dimensions() {
        assert_eq!(
            Grid::new(1 << 62, 4),
            Err(AutomatonError::InvalidDimension { width: 1 << 62, height: 4 })
        );
        assert!(Grid::new(isize::MAX, 2).is_err());
    }

    #[test]
    fn test_get_wraps_toroidally() {
        let mut grid = Grid::new(5, 4).unwrap();
        grid.set(0, 0, Cell::Alive);
        grid.set(4, 3, Cell::Alive);

        assert_eq!(grid.get(5, 0), Cell::Alive);
        assert_eq!(grid.get(-1, -1), Cell::Alive);
        assert_eq!(grid.get(-5, 4), Cell::Alive);
        // Two steps past the edge still lands inside the grid
        assert_eq!(grid.get(6, 0), grid.get(1, 0));
        assert_eq!(grid.get(isize::MIN, isize::MAX), grid.get(isize::MIN % 5 + 5, isize::MAX % 4));
    }

    #[test]
    fn test_set_out_of_range_is_ignored() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(3, 0, Cell::Alive);
        grid.set(0, 7, Cell::Alive);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_rows() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set_row(1, &[Cell::Alive, Cell::Dead, Cell::Alive]).unwrap();
        assert_eq!(grid.row(0), Some(&[Cell::Dead; 3][..]));
        assert_eq!(grid.row(1), Some(&[Cell::Alive, Cell::Dead, Cell::Alive][..]));
        assert_eq!(grid.row(2), None);
        grid.set_row(2, &[Cell::Alive; 3]).unwrap();
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn test_set_row_rejects_wrong_length() {
        let mut grid = Grid::new(3, 2).unwrap();
        assert_eq!(
            grid.set_row(0, &[Cell::Alive; 2]),
            Err(AutomatonError::DimensionMismatch {
                width: 3,
                height: 1,
                found_width: 2,
                found_height: 1,
            })
        );
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_from_rows() {
        let rows = vec![
            vec![Cell::Dead, Cell::Alive],
            vec![Cell::Alive, Cell::Dead],
        ];
        let grid = Grid::from_rows(2, 2, &rows).unwrap();
        assert_eq!(grid.get(1, 0), Cell::Alive);
        assert_eq!(grid.get(0, 1), Cell::Alive);
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn test_from_rows_shape_mismatch() {
        let too_few = vec![vec![Cell::Dead; 2]];
        assert_eq!(
            Grid::from_rows(2, 2, &too_few),
            Err(AutomatonError::DimensionMismatch {
                width: 2,
                height: 2,
                found_width: 2,
                found_height: 1,
            })
        );

        let ragged = vec![vec![Cell::Dead; 2], vec![Cell::Dead; 3]];
        assert_eq!(
            Grid::from_rows(2, 2, &ragged),
            Err(AutomatonError::DimensionMismatch {
                width: 2,
                height: 2,
                found_width: 3,
                found_height: 2,
            })
        );
    }

    #[test]
    fn test_fill_random_is_seeded() {
        let mut a = Grid::new(16, 16).unwrap();
        let mut b = Grid::new(16, 16).unwrap();
        a.fill_random(&mut StdRng::seed_from_u64(7), 0.5);
        b.fill_random(&mut StdRng::seed_from_u64(7), 0.5);
        assert_eq!(a, b);
        assert!(a.population() > 0 && a.population() < 256);

        a.clear();
        assert_eq!(a.population(), 0);
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(1, 0, Cell::Alive);
        assert_eq!(grid.to_string(), ".#.\n...\n");
    }

    proptest! {
        #[test]
        fn set_then_get_round_trips(
            w in 1isize..32, h in 1isize..32,
            fx in 0.0f64..1.0, fy in 0.0f64..1.0,
            alive in any::<bool>(),
        ) {
            let mut grid = Grid::new(w, h).unwrap();
            let x = (fx * w as f64) as usize;
            let y = (fy * h as f64) as usize;
            let cell = Cell::from(alive);
            grid.set(x, y, cell);
            prop_assert_eq!(grid.get(x as isize, y as isize), cell);
        }

        #[test]
        fn get_is_periodic(
            w in 1isize..16, h in 1isize..16,
            x in -1000isize..1000, y in -1000isize..1000,
            seed in any::<u64>(),
        ) {
            let mut grid = Grid::new(w, h).unwrap();
            grid.fill_random(&mut StdRng::seed_from_u64(seed), 0.5);
            prop_assert_eq!(grid.get(x, y), grid.get(x + w, y));
            prop_assert_eq!(grid.get(x, y), grid.get(x, y - 3 * h));
        }
    }
}
