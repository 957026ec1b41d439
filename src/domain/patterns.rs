/// A small Life pattern given as live cell offsets from its top-left corner
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Create a pattern from alive cell offsets; the bounding box is derived
    pub fn new(name: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().map_or(0, |x| x + 1);
        let height = cells.iter().map(|(_, y)| *y).max().map_or(0, |y| y + 1);
        Self { name, width, height, cells }
    }

    /// Look up a preset by name, case-insensitively
    pub fn by_name(name: &str) -> Option<Pattern> {
        presets::all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

/// Presets that can be named in a simulation config
pub mod presets {
    use super::Pattern;

    /// 2x2 still life
    pub fn block() -> Pattern {
        Pattern::new("Block", vec![(0, 0), (1, 0), (0, 1), (1, 1)])
    }

    /// Period 2, starts horizontal
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", vec![(0, 0), (1, 0), (2, 0)])
    }

    /// Travels one cell down and right every four generations
    pub fn glider() -> Pattern {
        Pattern::new("Glider", vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)])
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), glider()]
    }
}
