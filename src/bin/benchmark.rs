//! Timing comparison of the Life algorithms and elementary row generation

use std::time::Instant;

use cellular_automata::{Algorithm, ElementaryEngine, LifeEngine};
use rand::{SeedableRng, rngs::StdRng};

fn benchmark_life(size: isize, algorithm: Algorithm, iterations: u32) -> anyhow::Result<f64> {
    let mut engine = LifeEngine::new(size, size)?.with_algorithm(algorithm);
    engine.randomize_with(&mut StdRng::seed_from_u64(42));

    let start = Instant::now();
    for _ in 0..iterations {
        engine.tick();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

/// Milliseconds to fill a whole canvas, one row per tick
fn benchmark_elementary(size: isize, rule: i64) -> anyhow::Result<f64> {
    let mut engine = ElementaryEngine::new(size, size, rule)?;
    engine.set_starting_state();

    let start = Instant::now();
    while !engine.is_finished() {
        engine.tick();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0)
}

fn main() -> anyhow::Result<()> {
    println!("=== Game of Life Performance Benchmark ===\n");

    let sizes = [100, 250, 500, 1000, 2000];
    let iterations = 20;

    let algorithms = Algorithm::all();
    print!("{:>10}", "Size");
    for algorithm in &algorithms {
        print!(" {:>12}", algorithm.name());
    }
    println!(" {:>10}", "Speedup");
    println!("{:-<1$}", "", 22 + 13 * algorithms.len());

    for size in sizes {
        let timings = algorithms
            .iter()
            .map(|&algorithm| benchmark_life(size, algorithm, iterations))
            .collect::<anyhow::Result<Vec<f64>>>()?;
        let fastest = timings.iter().copied().fold(f64::INFINITY, f64::min);

        print!("{:>10}", format!("{}x{}", size, size));
        for ms in &timings {
            print!(" {:>12.2}", ms);
        }
        println!(" {:>9.1}x", timings[0] / fastest);
    }

    println!("\n=== Elementary canvas fill ===\n");

    println!("{:>10} {:>12} {:>12}", "Size", "Rule 30", "Rule 110");
    println!("{:-<36}", "");
    for size in sizes {
        println!(
            "{:>10} {:>12.2} {:>12.2}",
            format!("{}x{}", size, size),
            benchmark_elementary(size, 30)?,
            benchmark_elementary(size, 110)?
        );
    }

    Ok(())
}
