use std::time::{Duration, Instant};

use log::{debug, info, trace};

use super::Automaton;

/// Bounds for interactive speed changes through `adjust_speed`
pub const MIN_UPDATES_PER_SECOND: f32 = 1.0;
pub const MAX_UPDATES_PER_SECOND: f32 = 100.0;

/// Driver owns an automaton and decides when it ticks.
/// It never ticks while a frame is being painted: `run` alternates
/// strictly between the two.
pub struct Driver<A: Automaton> {
    automaton: A,
    pub is_running: bool,
    generation: u64,
    max_generations: Option<u64>,
    update_timer: Duration,
    tick_interval: Duration,
}

impl<A: Automaton> Driver<A> {
    /// Create a running driver ticking once per `tick_interval`
    pub fn new(automaton: A, tick_interval: Duration) -> Self {
        Self {
            automaton,
            is_running: true,
            generation: 0,
            max_generations: None,
            update_timer: Duration::ZERO,
            tick_interval,
        }
    }

    /// Stop after this many generations (builder pattern)
    pub fn with_max_generations(mut self, max_generations: Option<u64>) -> Self {
        self.max_generations = max_generations;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Adjust simulation speed by `delta` ticks per second
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        let updates_per_second = (self.updates_per_second() + delta)
            .clamp(MIN_UPDATES_PER_SECOND, MAX_UPDATES_PER_SECOND);
        self.tick_interval = Duration::from_secs_f32(1.0 / updates_per_second);
        self
    }

    pub fn automaton(&self) -> &A {
        &self.automaton
    }

    pub fn into_inner(self) -> A {
        self.automaton
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn updates_per_second(&self) -> f32 {
        1.0 / self.tick_interval.as_secs_f32()
    }

    /// Time between two ticks
    pub const fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// True when the automaton is finished or the generation limit is hit
    pub fn is_done(&self) -> bool {
        self.automaton.is_finished()
            || self.max_generations.is_some_and(|max| self.generation >= max)
    }

    /// Tick once right away, regardless of timing. Returns false if the
    /// driver is done.
    pub fn step(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        let start = Instant::now();
        self.automaton.tick();
        self.generation += 1;
        trace!(
            "Generation {} took {:.3} ms",
            self.generation,
            start.elapsed().as_secs_f64() * 1000.0
        );
        true
    }

    /// Account for elapsed wall time and tick if a full interval has
    /// passed. Returns true if a tick happened.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if !self.is_running {
            return false;
        }

        self.update_timer += delta;
        if self.update_timer < self.tick_interval {
            return false;
        }
        self.update_timer = Duration::ZERO;
        self.step()
    }

    /// Blocking loop: paint the starting state, then alternate sleeping for
    /// one interval, ticking, and painting until done. Returns the number of
    /// generations produced.
    pub fn run<F>(&mut self, mut frame: F) -> u64
    where
        F: FnMut(&A, u64),
    {
        debug!("Driver starting with a {:?} tick interval", self.tick_interval);
        frame(&self.automaton, self.generation);
        while self.is_running && !self.is_done() {
            std::thread::sleep(self.tick_interval);
            if self.step() {
                frame(&self.automaton, self.generation);
            }
        }
        info!("Driver stopped after {} generations", self.generation);
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ElementaryEngine, Grid, LifeEngine, presets};

    const FAST: Duration = Duration::from_millis(1);

    /// Counts ticks on a 1x1 grid, finished after `limit` ticks
    struct Counter {
        grid: Grid,
        ticks: u32,
        limit: u32,
    }

    impl Automaton for Counter {
        fn tick(&mut self) {
            self.ticks += 1;
        }

        fn grid(&self) -> &Grid {
            &self.grid
        }

        fn is_finished(&self) -> bool {
            self.ticks >= self.limit
        }
    }

    fn counter(limit: u32) -> Counter {
        Counter { grid: Grid::new(1, 1).unwrap(), ticks: 0, limit }
    }

    #[test]
    fn test_advance_waits_for_interval() {
        let mut driver = Driver::new(counter(100), Duration::from_millis(100));
        assert!(!driver.advance(Duration::from_millis(50)));
        assert!(driver.advance(Duration::from_millis(60)));
        assert!(!driver.advance(Duration::from_millis(10)));
        assert_eq!(driver.generation(), 1);
    }

    #[test]
    fn test_paused_driver_does_not_tick() {
        let mut driver = Driver::new(counter(100), Duration::from_millis(100)).toggle_running();
        assert!(!driver.advance(Duration::from_secs(5)));
        assert_eq!(driver.automaton().ticks, 0);
    }

    #[test]
    fn test_interval_is_kept_as_given() {
        for interval in [Duration::from_millis(2), Duration::from_secs(2)] {
            assert_eq!(Driver::new(counter(1), interval).tick_interval(), interval);
        }
    }

    #[test]
    fn test_adjust_speed_is_clamped() {
        let driver = Driver::new(counter(1), Duration::from_millis(1)).adjust_speed(0.0);
        assert!((driver.updates_per_second() - MAX_UPDATES_PER_SECOND).abs() < 0.01);
        let driver = driver.adjust_speed(-1000.0);
        assert_eq!(driver.tick_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_run_stops_when_finished() {
        let mut driver = Driver::new(counter(3), FAST);
        let mut frames = Vec::new();
        let generations = driver.run(|_, generation| frames.push(generation));
        assert_eq!(generations, 3);
        assert_eq!(frames, [0, 1, 2, 3]);
        assert!(!driver.step());
    }

    #[test]
    fn test_run_respects_generation_limit() {
        let mut life = LifeEngine::new(8, 8).unwrap();
        life.place(&presets::blinker(), 2, 2);
        let mut driver =
            Driver::new(life, FAST).with_max_generations(Some(4));
        let mut populations = Vec::new();
        driver.run(|life, _| populations.push(life.grid().population()));
        assert_eq!(populations, [3; 5]);
        assert_eq!(driver.into_inner().generation(), 4);
    }

    #[test]
    fn test_run_elementary_fills_canvas() {
        let mut engine = ElementaryEngine::new(11, 5, 255).unwrap();
        engine.set_starting_state();
        let mut driver = Driver::new(engine, FAST);
        assert_eq!(driver.run(|_, _| {}), 4);
        assert_eq!(driver.automaton().current_row(), 4);
    }
}
