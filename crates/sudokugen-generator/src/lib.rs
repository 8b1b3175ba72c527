//! Puzzle generation for the Sudokugen engine.
//!
//! This crate is the public facade: it turns a [`GeneratorConfig`] into a
//! [`GeneratedPuzzle`] whose problem grid is guaranteed to have exactly
//! one solution.
//!
//! Generation runs in four steps:
//!
//! 1. derive phase-specific random streams from a [`PuzzleSeed`];
//! 2. fill a complete solution grid (randomized seeding, deterministic
//!    backtracking completion);
//! 3. clear cells — optionally in point-symmetric pairs — re-counting
//!    solutions after every removal so uniqueness is never lost;
//! 4. analyze the puzzle's complexity and assemble the output snapshot.
//!
//! # Examples
//!
//! ```
//! use sudokugen_core::{BoardSize, Difficulty};
//! use sudokugen_generator::{GeneratorConfig, PuzzleGenerator};
//!
//! let config = GeneratorConfig::new(BoardSize::Nine, Difficulty::Medium)
//!     .with_symmetry(true)
//!     .with_hints(true);
//! let puzzle = PuzzleGenerator::new(config).generate()?;
//!
//! println!("seed: {}", puzzle.seed);
//! println!("{}", puzzle.problem);
//! assert!(puzzle.hints.is_some());
//! # Ok::<(), sudokugen_generator::GenerateError>(())
//! ```

pub use self::{
    config::{ConfigError, GeneratorConfig, RemovalTable},
    generator::{GenerateError, PuzzleGenerator},
    puzzle::GeneratedPuzzle,
    seed::{ParseSeedError, PuzzleSeed},
};

mod config;
mod fill;
mod generator;
mod puzzle;
mod remover;
mod seed;
