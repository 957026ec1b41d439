use crate::domain::{Cell, ElementaryEngine, Grid, LifeEngine};

/// What a driver needs from a grid-based automaton: advance one
/// generation, and expose the cells to paint.
pub trait Automaton {
    /// Advance one generation
    fn tick(&mut self);

    /// The grid to paint after the latest tick
    fn grid(&self) -> &Grid;

    /// True when further ticks would not change anything
    fn is_finished(&self) -> bool {
        false
    }

    /// Cells with their positions in raster order
    fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.grid().iter_cells()
    }
}

impl Automaton for LifeEngine {
    fn tick(&mut self) {
        LifeEngine::tick(self);
    }

    fn grid(&self) -> &Grid {
        self.current()
    }
}

impl Automaton for ElementaryEngine {
    fn tick(&mut self) {
        ElementaryEngine::tick(self);
    }

    fn grid(&self) -> &Grid {
        ElementaryEngine::grid(self)
    }

    fn is_finished(&self) -> bool {
        ElementaryEngine::is_finished(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    fn population<A: Automaton>(automaton: &A) -> usize {
        automaton.cells().filter(|(_, _, cell)| cell.is_alive()).count()
    }

    #[test]
    fn test_life_through_trait() {
        let mut life = LifeEngine::new(6, 6).unwrap();
        life.place(&presets::blinker(), 1, 2);
        Automaton::tick(&mut life);
        assert_eq!(population(&life), 3);
        assert!(!Automaton::is_finished(&life));
        assert_eq!(life.cells().count(), 36);
    }

    #[test]
    fn test_elementary_through_trait() {
        let mut elementary = ElementaryEngine::new(5, 2, 255).unwrap();
        elementary.set_starting_state();
        assert!(!Automaton::is_finished(&elementary));
        Automaton::tick(&mut elementary);
        assert!(Automaton::is_finished(&elementary));
        assert_eq!(population(&elementary), 6);
    }
}
