//! Puzzle complexity analysis.
//!
//! [`analyze`] is a pure function of the *puzzle* grid (never the
//! solution): it counts givens, empties, and forced cells through the same
//! validity predicate the solver uses, and folds them into a scalar
//! complexity score. The score, the derived time estimate, and the hint
//! strings are all deterministic — calling [`analyze`] twice on the same
//! grid yields identical results.

use serde::Serialize;
use sudokugen_core::{Board, Difficulty};

/// Minutes of estimated solving time per 12 points of complexity.
const COMPLEXITY_PER_MINUTE: u32 = 12;

/// Complexity statistics for a puzzle grid.
///
/// Produced by [`analyze`]. The scalar [`complexity`](Self::complexity)
/// combines the given count and the forced-cell count monotonically: fewer
/// givens and fewer single-candidate cells both raise it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ComplexityReport {
    given_count: usize,
    empty_count: usize,
    single_candidates: usize,
    complexity: u32,
}

impl ComplexityReport {
    /// Returns the number of given cells.
    #[must_use]
    pub const fn given_count(&self) -> usize {
        self.given_count
    }

    /// Returns the number of empty cells.
    ///
    /// For a generated puzzle this equals the number of removed cells, so
    /// callers can compare it against the removal target they requested to
    /// observe under-removal.
    #[must_use]
    pub const fn empty_count(&self) -> usize {
        self.empty_count
    }

    /// Returns the number of empty cells with exactly one legal candidate.
    #[must_use]
    pub const fn single_candidates(&self) -> usize {
        self.single_candidates
    }

    /// Returns the scalar complexity score.
    ///
    /// Computed as `4 * empty_count - 3 * single_candidates`. The exact
    /// weights are a tuning parameter; the monotonicity (fewer givens or
    /// fewer forced cells never lowers the score) is the contract.
    #[must_use]
    pub const fn complexity(&self) -> u32 {
        self.complexity
    }

    /// Returns the estimated solving time in whole minutes, at least 1.
    #[must_use]
    pub const fn estimated_minutes(&self) -> u32 {
        let minutes = self.complexity / COMPLEXITY_PER_MINUTE;
        if minutes == 0 { 1 } else { minutes }
    }

    /// Returns canned, non-spoiling hints for the puzzle.
    ///
    /// Hint verbosity is keyed by `difficulty`: easier tiers get more
    /// hints. The strings never reveal a concrete cell or value, and the
    /// output is deterministic.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudokugen_core::Difficulty;
    /// use sudokugen_solver::analyze;
    ///
    /// let board = "
    ///     12 34
    ///     34 12
    ///     21 43
    ///     __ __
    /// "
    /// .parse()?;
    /// let report = analyze(&board);
    ///
    /// let easy = report.hints(Difficulty::Easy);
    /// let expert = report.hints(Difficulty::Expert);
    /// assert!(easy.len() > expert.len());
    /// # Ok::<(), sudokugen_core::ParseBoardError>(())
    /// ```
    #[must_use]
    pub fn hints(&self, difficulty: Difficulty) -> Vec<String> {
        let total = self.given_count + self.empty_count;
        let mut hints = Vec::new();
        if difficulty == Difficulty::Easy {
            hints.push(format!(
                "{} of the {total} cells are already filled in.",
                self.given_count
            ));
        }
        if difficulty <= Difficulty::Medium {
            hints.push(format!(
                "There are {} cells with only one possible value.",
                self.single_candidates
            ));
        }
        hints.push(
            match difficulty {
                Difficulty::Easy => {
                    "Scan each row, column, and box for the value that fits only one cell."
                }
                Difficulty::Medium => {
                    "Start from the rows, columns, and boxes with the fewest empty cells."
                }
                Difficulty::Hard => {
                    "Pencil in candidates and look for cells where only one value remains."
                }
                Difficulty::Expert => {
                    "Track candidates carefully before committing a value; guesses are costly."
                }
            }
            .to_owned(),
        );
        hints
    }
}

/// Computes complexity statistics for a puzzle grid.
///
/// Pure function: no side effects, no randomness, and the board is only
/// read. Candidates are derived from
/// [`Board::candidates_at`], i.e. from the same validity predicate the
/// solver searches with, applied to the puzzle grid rather than the
/// solution.
#[must_use]
pub fn analyze(board: &Board) -> ComplexityReport {
    let mut given_count = 0;
    let mut empty_count = 0;
    let mut single_candidates = 0;
    for pos in board.positions() {
        let cell = board.cell(pos);
        if cell.is_given() {
            given_count += 1;
        }
        if cell.is_empty() {
            empty_count += 1;
            if board.candidates_at(pos).len() == 1 {
                single_candidates += 1;
            }
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    let complexity = (4 * empty_count - 3 * single_candidates) as u32;

    ComplexityReport {
        given_count,
        empty_count,
        single_candidates,
        complexity,
    }
}

#[cfg(test)]
mod tests {
    use sudokugen_core::Board;

    use super::*;

    fn forced_row_board() -> Board {
        // Each empty cell in the last row has exactly one candidate.
        "
            12 34
            34 12
            21 43
            __ __
        "
        .parse()
        .unwrap()
    }

    #[test]
    fn test_counts_on_forced_row() {
        let report = analyze(&forced_row_board());
        assert_eq!(report.given_count(), 12);
        assert_eq!(report.empty_count(), 4);
        assert_eq!(report.single_candidates(), 4);
        assert_eq!(report.complexity(), 4 * 4 - 3 * 4);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let board = forced_row_board();
        assert_eq!(analyze(&board), analyze(&board));
    }

    #[test]
    fn test_fewer_givens_raise_complexity() {
        let fuller = forced_row_board();
        let mut emptier = fuller.clone();
        emptier.clear(sudokugen_core::Position::new(0, 0));
        assert!(analyze(&emptier).complexity() > analyze(&fuller).complexity());
    }

    #[test]
    fn test_estimated_minutes_is_at_least_one() {
        let report = analyze(&forced_row_board());
        assert_eq!(report.complexity(), 4);
        assert_eq!(report.estimated_minutes(), 1);
    }

    #[test]
    fn test_hint_verbosity_by_difficulty() {
        let report = analyze(&forced_row_board());
        assert_eq!(report.hints(Difficulty::Easy).len(), 3);
        assert_eq!(report.hints(Difficulty::Medium).len(), 2);
        assert_eq!(report.hints(Difficulty::Hard).len(), 1);
        assert_eq!(report.hints(Difficulty::Expert).len(), 1);
    }

    #[test]
    fn test_hints_report_forced_cell_count() {
        let report = analyze(&forced_row_board());
        let hints = report.hints(Difficulty::Medium);
        assert_eq!(
            hints[0],
            "There are 4 cells with only one possible value."
        );
    }

    #[test]
    fn test_hints_are_deterministic() {
        let report = analyze(&forced_row_board());
        assert_eq!(
            report.hints(Difficulty::Easy),
            report.hints(Difficulty::Easy)
        );
    }

    #[test]
    fn test_solved_grid_has_zero_complexity() {
        let solved: Board = "
            12 34
            34 12
            21 43
            43 21
        "
        .parse()
        .unwrap();
        let report = analyze(&solved);
        assert_eq!(report.empty_count(), 0);
        assert_eq!(report.single_candidates(), 0);
        assert_eq!(report.complexity(), 0);
    }
}
