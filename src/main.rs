use std::{env, io::Write};

use anyhow::{Context, bail};
use cellular_automata::{Automaton, AutomatonKind, Driver, SimulationConfig};
use log::{LevelFilter, info};
use simple_logger::SimpleLogger;

/// Clear the terminal and move the cursor home
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

fn run<A: Automaton>(automaton: A, config: &SimulationConfig) -> anyhow::Result<()> {
    let mut driver = Driver::new(automaton, config.tick_period())
        .with_max_generations(config.max_generations);

    let stdout = std::io::stdout();
    let mut result = Ok(());
    driver.run(|automaton, generation| {
        if result.is_err() {
            return;
        }
        let mut out = stdout.lock();
        result = write!(
            out,
            "{CLEAR_SCREEN}generation {generation}\n{}",
            automaton.grid()
        )
        .and_then(|_| out.flush());
    });
    result.context("failed to draw frame")
}

fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    let mut args = env::args().skip(1);
    let kind = match args.next().as_deref() {
        None => None,
        Some("elementary") => Some(AutomatonKind::Elementary),
        Some("life") => Some(AutomatonKind::Life),
        Some(other) => bail!("unknown automaton {other:?}, expected `life` or `elementary`"),
    };

    let mut config = match args.next() {
        Some(path) => SimulationConfig::load(&path)
            .with_context(|| format!("failed to load config from {path}"))?,
        None => SimulationConfig::default(),
    };
    if let Some(kind) = kind {
        config.kind = kind;
    }
    info!("Starting {:?} {}x{}", config.kind, config.width, config.height);

    match config.kind {
        AutomatonKind::Life => run(config.build_life()?, &config),
        AutomatonKind::Elementary => run(config.build_elementary()?, &config),
    }
}
