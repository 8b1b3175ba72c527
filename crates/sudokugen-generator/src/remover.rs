use rand::seq::SliceRandom as _;
use rand_pcg::Pcg64;
use sudokugen_core::{Board, Position};
use sudokugen_solver::BacktrackSolver;

use crate::GenerateError;

/// Clears given cells from `board` while the puzzle stays uniquely
/// solvable.
///
/// Positions are visited in one shuffled pass. Each still-given position
/// is tentatively cleared — together with its point reflection when
/// `symmetrical` removal is on and the mirror is a distinct, still-given
/// cell — and the clearing is kept only if the board still has exactly one
/// solution; otherwise the original values are restored from `solution`.
///
/// Stops once `target` cells were removed or the pass is exhausted.
/// Returns the number of cells actually removed: reaching fewer than
/// `target` is a normal outcome, uniqueness is never traded for the
/// requested count.
pub(crate) fn remove_cells(
    board: &mut Board,
    solution: &Board,
    target: usize,
    symmetrical: bool,
    rng: &mut Pcg64,
) -> Result<usize, GenerateError> {
    let solver = BacktrackSolver::new();
    let dimension = board.size().dimension();
    let mut positions: Vec<Position> = board.positions().collect();
    positions.shuffle(rng);

    let mut removed = 0;
    for pos in positions {
        if removed >= target {
            break;
        }
        if !board.cell(pos).is_given() {
            continue;
        }
        let mirror = pos.mirrored(dimension);
        let pair = symmetrical && mirror != pos && board.cell(mirror).is_given();

        board.clear(pos);
        if pair {
            board.clear(mirror);
        }

        match solver.count_solutions(board, 2) {
            1 => removed += if pair { 2 } else { 1 },
            0 => {
                // Unreachable for a board derived from a valid solution:
                // clearing cells can only widen the solution space.
                log::error!(
                    "no solution left after clearing {pos}; \
                     aborting this generation request"
                );
                return Err(GenerateError::LostSolutions);
            }
            _ => {
                restore(board, solution, pos);
                if pair {
                    restore(board, solution, mirror);
                }
            }
        }
    }
    Ok(removed)
}

fn restore(board: &mut Board, solution: &Board, pos: Position) {
    if let Some(value) = solution.value(pos) {
        board.place_given(pos, value);
    }
}

#[cfg(test)]
mod tests {
    use sudokugen_core::{BoardSize, Variant};

    use super::*;
    use crate::PuzzleSeed;

    fn rng(label: &str) -> Pcg64 {
        PuzzleSeed::from_bytes([3; 32]).stream(label)
    }

    fn solution_and_board() -> (Board, Board) {
        let solution: Board = "
            534 678 912
            672 195 348
            198 342 567
            859 761 423
            426 853 791
            713 924 856
            961 537 284
            287 419 635
            345 286 179
        "
        .parse()
        .unwrap();
        let mut board = solution.clone();
        board.mark_all_given();
        (solution, board)
    }

    #[test]
    fn test_removed_count_matches_board_state() {
        let (solution, mut board) = solution_and_board();
        let removed =
            remove_cells(&mut board, &solution, 40, false, &mut rng("plain")).unwrap();
        assert_eq!(removed, board.empty_count());
        assert_eq!(board.given_count(), 81 - removed);
    }

    #[test]
    fn test_preserves_uniqueness() {
        let (solution, mut board) = solution_and_board();
        remove_cells(&mut board, &solution, 52, false, &mut rng("unique")).unwrap();
        assert!(BacktrackSolver::new().has_unique_solution(&board));
    }

    #[test]
    fn test_surviving_givens_match_the_solution() {
        let (solution, mut board) = solution_and_board();
        remove_cells(&mut board, &solution, 46, false, &mut rng("given")).unwrap();
        for pos in board.positions() {
            let cell = board.cell(pos);
            if cell.is_given() {
                assert_eq!(cell.value(), solution.value(pos));
            } else {
                assert!(cell.is_empty());
            }
        }
    }

    #[test]
    fn test_symmetric_removal_mirrors_every_hole() {
        let (solution, mut board) = solution_and_board();
        remove_cells(&mut board, &solution, 40, true, &mut rng("mirror")).unwrap();
        for pos in board.positions() {
            if board.cell(pos).is_empty() {
                assert!(board.cell(pos.mirrored(9)).is_empty());
            }
        }
        assert!(BacktrackSolver::new().has_unique_solution(&board));
    }

    #[test]
    fn test_zero_target_removes_nothing() {
        let (solution, mut board) = solution_and_board();
        let removed =
            remove_cells(&mut board, &solution, 0, false, &mut rng("zero")).unwrap();
        assert_eq!(removed, 0);
        assert!(board.is_complete());
    }

    #[test]
    fn test_exhaustion_under_removes_without_error() {
        // A 4×4 board cannot lose 15 of its 16 cells and stay unique;
        // the remover must settle for less, not fail.
        let solution: Board = "
            12 34
            34 12
            21 43
            43 21
        "
        .parse()
        .unwrap();
        let mut board = solution.clone();
        let removed =
            remove_cells(&mut board, &solution, 15, false, &mut rng("exhaust")).unwrap();
        assert!(removed < 15);
        assert!(BacktrackSolver::new().has_unique_solution(&board));
    }

    #[test]
    fn test_respects_board_variant() {
        let mut fill_rng = rng("variant-fill");
        let solution =
            crate::fill::filled_board(BoardSize::Nine, Variant::Diagonal, &mut fill_rng)
                .unwrap();
        let mut board = solution.clone();
        board.mark_all_given();
        remove_cells(&mut board, &solution, 46, false, &mut rng("variant")).unwrap();
        // Uniqueness was judged under diagonal rules; it must hold there.
        assert!(BacktrackSolver::new().has_unique_solution(&board));
        assert_eq!(board.variant(), Variant::Diagonal);
    }
}
