//! The generation output object.

use std::collections::BTreeMap;

use serde::Serialize;
use sudokugen_core::{Board, Difficulty};
use sudokugen_solver::ComplexityReport;

use crate::PuzzleSeed;

/// A generated puzzle, ready to hand to a caller-owned transport layer.
///
/// The snapshot is immutable by convention: the engine constructs it once
/// per request and has no further storage or serialization responsibility.
/// Every field is plain data; the wire format is the caller's concern
/// (the whole object implements [`serde::Serialize`] for that purpose).
///
/// Two guarantees hold for every value of this type produced by
/// [`PuzzleGenerator`](crate::PuzzleGenerator):
///
/// - `problem` has exactly one solution, and that solution is `solution`;
/// - every given cell of `problem` already holds its `solution` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPuzzle {
    /// The puzzle grid: given cells pre-filled, the rest empty.
    pub problem: Board,
    /// The fully populated solution grid.
    pub solution: Board,
    /// The difficulty tier the puzzle was generated for.
    pub difficulty: Difficulty,
    /// Whether cells were removed in point-symmetric pairs.
    pub symmetrical: bool,
    /// Complexity statistics of the puzzle grid.
    pub stats: ComplexityReport,
    /// Canned hints; present only when the configuration asked for them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<String>>,
    /// Estimated solving time in minutes, derived from the stats.
    pub time_estimate_minutes: u32,
    /// The seed that produced this puzzle; replaying it with the same
    /// configuration reproduces the puzzle exactly.
    pub seed: PuzzleSeed,
    /// Opaque display settings copied from the configuration.
    pub style: BTreeMap<String, String>,
}
