use rand::seq::SliceRandom as _;
use rand_pcg::Pcg64;
use sudokugen_core::{Board, BoardSize, Position, Variant};
use sudokugen_solver::BacktrackSolver;

/// Upper bound on fill attempts before the request is abandoned.
pub(crate) const MAX_FILL_ATTEMPTS: usize = 64;

/// Produces a fully populated grid satisfying the board invariant.
///
/// Two-phase fill: seed cells that constrain each other only locally with
/// shuffled permutations, then let the deterministic backtracking solver
/// complete the grid. All randomness lives in the seeding phase, so
/// distinct streams yield distinct solutions while the completion step
/// stays reproducible.
pub(crate) fn filled_board(size: BoardSize, variant: Variant, rng: &mut Pcg64) -> Option<Board> {
    let solver = BacktrackSolver::new();
    for _ in 0..MAX_FILL_ATTEMPTS {
        let mut board = Board::new(size, variant);
        match variant {
            Variant::Classic => seed_diagonal_boxes(&mut board, rng),
            Variant::Diagonal => seed_main_diagonal(&mut board, rng),
        }
        if solver.solve(&mut board) {
            return Some(board);
        }
    }
    None
}

fn shuffled_values(dimension: u8, rng: &mut Pcg64) -> Vec<u8> {
    let mut values: Vec<u8> = (1..=dimension).collect();
    values.shuffle(rng);
    values
}

/// Fills the boxes on the main diagonal of the box grid.
///
/// These boxes share no row or column, so an arbitrary permutation in each
/// never conflicts and the seeding needs no backtracking.
fn seed_diagonal_boxes(board: &mut Board, rng: &mut Pcg64) {
    let size = board.size();
    let box_rows = size.box_rows();
    let box_cols = size.box_cols();
    for k in 0..size.independent_box_count() {
        let top = k * box_rows;
        let left = k * box_cols;
        let mut values = shuffled_values(size.dimension(), rng).into_iter();
        for row in top..top + box_rows {
            for col in left..left + box_cols {
                if let Some(value) = values.next() {
                    board.fill(Position::new(row, col), value);
                }
            }
        }
    }
}

/// Fills the main diagonal with one shuffled permutation.
///
/// Used for [`Variant::Diagonal`]: the diagonal cells of distinct prefill
/// boxes would all share the diagonal house, so box seeding cannot be
/// reused there; a permutation on the diagonal itself satisfies every
/// constraint.
fn seed_main_diagonal(board: &mut Board, rng: &mut Pcg64) {
    let dimension = board.size().dimension();
    for (i, value) in (0..dimension).zip(shuffled_values(dimension, rng)) {
        board.fill(Position::new(i, i), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PuzzleSeed;

    fn rng() -> Pcg64 {
        PuzzleSeed::from_bytes([7; 32]).stream("fill-test")
    }

    #[test]
    fn test_fills_every_size() {
        let mut rng = rng();
        for size in BoardSize::ALL {
            let board = filled_board(size, Variant::Classic, &mut rng).unwrap();
            assert!(board.is_complete());
            assert!(board.is_solved());
            assert_eq!(board.given_count(), 0);
        }
    }

    #[test]
    fn test_fills_diagonal_variant() {
        let mut rng = rng();
        for size in BoardSize::ALL {
            let board = filled_board(size, Variant::Diagonal, &mut rng).unwrap();
            assert!(board.is_solved());
            let mut diagonal: Vec<_> = (0..size.dimension())
                .map(|i| board.value(Position::new(i, i)).unwrap())
                .collect();
            diagonal.sort_unstable();
            diagonal.dedup();
            assert_eq!(diagonal.len(), usize::from(size.dimension()));
        }
    }

    #[test]
    fn test_distinct_streams_give_distinct_solutions() {
        let mut first_rng = PuzzleSeed::from_bytes([1; 32]).stream("fill-test");
        let mut second_rng = PuzzleSeed::from_bytes([2; 32]).stream("fill-test");
        let first = filled_board(BoardSize::Nine, Variant::Classic, &mut first_rng).unwrap();
        let second = filled_board(BoardSize::Nine, Variant::Classic, &mut second_rng).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_same_stream_is_reproducible() {
        let first = filled_board(BoardSize::Nine, Variant::Classic, &mut rng()).unwrap();
        let second = filled_board(BoardSize::Nine, Variant::Classic, &mut rng()).unwrap();
        assert_eq!(first, second);
    }
}
