//! Core data structures for the Sudokugen puzzle engine.
//!
//! This crate provides the board model shared by generation, solving, and
//! analysis: sizes and variants, positions and cells, transient candidate
//! sets, and the [`Board`] grid with its single validity predicate.
//!
//! # Overview
//!
//! - [`BoardSize`]: the supported dimensions (4×4, 6×6, 9×9) and their box
//!   shapes.
//! - [`Variant`]: the rule set (classic, or classic plus the main-diagonal
//!   constraint).
//! - [`Difficulty`]: requested difficulty tiers.
//! - [`Position`] / [`Cell`]: coordinates and cell contents (value plus
//!   `given` flag).
//! - [`ValueSet`]: candidate bit sets, recomputed on demand.
//! - [`Board`]: the grid itself. [`Board::is_valid`] is the one legality
//!   oracle every component consults, so generator, solver, and analyzer
//!   can never disagree about the rules.
//!
//! # Examples
//!
//! ```
//! use sudokugen_core::{Board, Position};
//!
//! let board: Board = "
//!     12 34
//!     34 12
//!     21 43
//!     43 21
//! "
//! .parse()?;
//!
//! assert!(board.is_solved());
//! assert_eq!(board.candidates_at(Position::new(1, 1)).as_single(), Some(4));
//! # Ok::<(), sudokugen_core::ParseBoardError>(())
//! ```

pub use self::{
    board::{Board, ParseBoardError},
    cell::Cell,
    difficulty::{Difficulty, ParseDifficultyError},
    position::Position,
    size::{BoardSize, SizeError},
    value_set::{ValueSet, ValueSetIter},
    variant::{ParseVariantError, Variant},
};

mod board;
mod cell;
mod difficulty;
mod position;
mod size;
mod value_set;
mod variant;
