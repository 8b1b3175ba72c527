use sudokugen_core::Board;

/// An exhaustive backtracking solver and solution counter.
///
/// The traversal is fully deterministic: cells are visited in row-major
/// order and candidate values are tried in ascending order. For a given
/// grid the solver therefore always finds the same solution and counts
/// solutions in the same order, which keeps test expectations reproducible.
/// All randomness in puzzle generation lives in the generator, never here.
///
/// # Examples
///
/// ```
/// use sudokugen_core::Board;
/// use sudokugen_solver::BacktrackSolver;
///
/// let mut board: Board = "
///     12 34
///     34 12
///     21 43
///     __ __
/// "
/// .parse()?;
///
/// let solver = BacktrackSolver::new();
/// assert!(solver.solve(&mut board));
/// assert!(board.is_solved());
/// # Ok::<(), sudokugen_core::ParseBoardError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackSolver;

impl BacktrackSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        BacktrackSolver
    }

    /// Completes `board` in place and returns `true` if a solution exists.
    ///
    /// Fills empty cells in row-major order, trying values in ascending
    /// order, and short-circuits on the first full solution. On `false`
    /// the board is left exactly as passed in (every tentative value is
    /// undone on backtrack).
    ///
    /// Finding no solution is a normal outcome, not an error; the cell
    /// remover relies on it to reject candidate removals.
    pub fn solve(&self, board: &mut Board) -> bool {
        self.solve_from(board, 0)
    }

    fn solve_from(&self, board: &mut Board, start: usize) -> bool {
        let Some((index, pos)) = board.first_empty_from(start) else {
            return true;
        };
        for value in 1..=board.size().dimension() {
            if board.is_valid(pos, value) {
                board.fill(pos, value);
                if self.solve_from(board, index + 1) {
                    return true;
                }
                board.clear(pos);
            }
        }
        false
    }

    /// Counts the solutions of `board`, stopping early at `cap`.
    ///
    /// Performs the same row-major, ascending-value traversal as
    /// [`solve`](Self::solve) but keeps searching after each completion
    /// until `cap` solutions are found or the space is exhausted. A cap of
    /// 2 distinguishes "unique" from "not unique" while bounding the
    /// worst-case runtime. The input board is not mutated; the search runs
    /// on an internal clone.
    ///
    /// A board with no empty cells counts as exactly one solution without
    /// any recursion.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudokugen_core::{Board, BoardSize, Variant};
    /// use sudokugen_solver::BacktrackSolver;
    ///
    /// let solver = BacktrackSolver::new();
    /// let empty = Board::new(BoardSize::Four, Variant::Classic);
    /// assert_eq!(solver.count_solutions(&empty, 2), 2);
    ///
    /// let solved: Board = "
    ///     12 34
    ///     34 12
    ///     21 43
    ///     43 21
    /// "
    /// .parse()?;
    /// assert_eq!(solver.count_solutions(&solved, 2), 1);
    /// # Ok::<(), sudokugen_core::ParseBoardError>(())
    /// ```
    #[must_use]
    pub fn count_solutions(&self, board: &Board, cap: usize) -> usize {
        let mut work = board.clone();
        let mut count = 0;
        self.count_from(&mut work, 0, cap, &mut count);
        count
    }

    fn count_from(&self, board: &mut Board, start: usize, cap: usize, count: &mut usize) {
        if *count >= cap {
            return;
        }
        let Some((index, pos)) = board.first_empty_from(start) else {
            *count += 1;
            return;
        };
        for value in 1..=board.size().dimension() {
            if board.is_valid(pos, value) {
                board.fill(pos, value);
                self.count_from(board, index + 1, cap, count);
                board.clear(pos);
                if *count >= cap {
                    return;
                }
            }
        }
    }

    /// Returns `true` if `board` has exactly one solution.
    #[must_use]
    pub fn has_unique_solution(&self, board: &Board) -> bool {
        self.count_solutions(board, 2) == 1
    }
}
