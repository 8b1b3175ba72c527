//! Example demonstrating puzzle generation.
//!
//! This example shows how to:
//! - Build a `GeneratorConfig` and a `PuzzleGenerator`
//! - Generate a random puzzle, or replay one from a seed
//! - Display the problem, solution, stats, and hints
//! - Sample several seeds in parallel and keep the most complex puzzle
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a size, difficulty, and variant:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 6 --difficulty hard --variant diagonal
//! ```
//!
//! Replay a previously printed seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```
//!
//! Sample 500 seeds and keep the most complex result:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty expert --samples 500
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use sudokugen_core::{Difficulty, Variant};
use sudokugen_generator::{
    ConfigError, GeneratedPuzzle, GenerateError, GeneratorConfig, PuzzleGenerator, PuzzleSeed,
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board dimension (4, 6, or 9).
    #[arg(long, value_name = "N", default_value_t = 9)]
    size: u8,

    /// Difficulty tier (easy, medium, hard, expert).
    #[arg(long, value_name = "TIER", default_value = "medium")]
    difficulty: Difficulty,

    /// Rule variant (classic, diagonal).
    #[arg(long, value_name = "VARIANT", default_value = "classic")]
    variant: Variant,

    /// Remove cells in point-symmetric pairs.
    #[arg(long)]
    symmetrical: bool,

    /// Attach hint strings to the output.
    #[arg(long)]
    hints: bool,

    /// Replay a seed (64 hex characters) instead of drawing a fresh one.
    #[arg(long, value_name = "SEED", conflicts_with = "samples")]
    seed: Option<PuzzleSeed>,

    /// Sample COUNT seeds in parallel and keep the most complex puzzle.
    #[arg(long, value_name = "COUNT")]
    samples: Option<usize>,
}

fn main() {
    let args = Args::parse();
    let config = match build_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    let generator = PuzzleGenerator::new(config);

    let samples = args.samples.unwrap_or(1);
    if samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(1);
    }

    match generate(&generator, args.seed, samples) {
        Ok(puzzle) => print_puzzle(&puzzle, samples),
        Err(err) => {
            eprintln!("generation failed: {err}");
            process::exit(1);
        }
    }
}

fn build_config(args: &Args) -> Result<GeneratorConfig, ConfigError> {
    Ok(GeneratorConfig::for_dimension(args.size, args.difficulty)?
        .with_variant(args.variant)
        .with_symmetry(args.symmetrical)
        .with_hints(args.hints))
}

fn generate(
    generator: &PuzzleGenerator,
    seed: Option<PuzzleSeed>,
    samples: usize,
) -> Result<GeneratedPuzzle, GenerateError> {
    if let Some(seed) = seed {
        return generator.generate_with_seed(seed);
    }
    if samples == 1 {
        return generator.generate();
    }

    let seeds: Vec<PuzzleSeed> = (0..samples).map(|_| PuzzleSeed::random()).collect();
    let puzzles = seeds
        .into_par_iter()
        .map(|seed| generator.generate_with_seed(seed))
        .collect::<Result<Vec<_>, _>>()?;
    let best = puzzles
        .into_iter()
        .max_by_key(|puzzle| puzzle.stats.complexity());
    match best {
        Some(puzzle) => Ok(puzzle),
        // samples >= 1 was checked above.
        None => unreachable!(),
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle, samples: usize) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    if samples > 1 {
        println!("Selection:");
        println!("  Sampled seeds: {samples}");
        println!("  Best complexity: {}", puzzle.stats.complexity());
        println!();
    }

    println!("Problem:");
    print_grid(&puzzle.problem.to_string());
    println!();
    println!("Solution:");
    print_grid(&puzzle.solution.to_string());
    println!();

    println!("Stats:");
    println!("  Givens: {}", puzzle.stats.given_count());
    println!("  Empty cells: {}", puzzle.stats.empty_count());
    println!(
        "  Single-candidate cells: {}",
        puzzle.stats.single_candidates()
    );
    println!("  Complexity: {}", puzzle.stats.complexity());
    println!("  Estimated minutes: {}", puzzle.time_estimate_minutes);

    if let Some(hints) = &puzzle.hints {
        println!();
        println!("Hints:");
        for hint in hints {
            println!("  {hint}");
        }
    }
}

fn print_grid(grid: &str) {
    for line in grid.lines() {
        println!("  {line}");
    }
}
