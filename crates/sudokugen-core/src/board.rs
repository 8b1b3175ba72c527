//! The board grid and its validity predicate.

use std::fmt::{self, Display};
use std::ops::Index;
use std::str::FromStr;

use derive_more::{Display as DisplayDerive, Error};
use serde::Serialize;

use crate::{BoardSize, Cell, Position, ValueSet, Variant};

/// An N×N grid of [`Cell`]s played under a fixed [`Variant`].
///
/// The board owns the single legality oracle, [`Board::is_valid`]. The
/// generator, solver, and complexity analyzer all consult it, so a value
/// that one component considers legal is legal for every component.
///
/// Cells are stored row-major. A non-empty value at `(r, c)` never repeats
/// elsewhere in row `r`, column `c`, or the box containing `(r, c)`; under
/// [`Variant::Diagonal`] the main diagonal is constrained as well.
///
/// # Examples
///
/// ```
/// use sudokugen_core::{Board, Position};
///
/// let board: Board = "
///     12 34
///     34 12
///     21 43
///     43 21
/// "
/// .parse()?;
///
/// assert!(board.is_solved());
/// assert_eq!(board.value(Position::new(0, 0)), Some(1));
/// # Ok::<(), sudokugen_core::ParseBoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: BoardSize,
    variant: Variant,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new(size: BoardSize, variant: Variant) -> Self {
        Self {
            size,
            variant,
            cells: vec![Cell::EMPTY; size.cell_count()],
        }
    }

    /// Returns the board size.
    #[must_use]
    pub const fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the variant the board is played under.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the same grid re-keyed to a different variant.
    ///
    /// Only the rule set changes; cell contents are untouched. Useful for
    /// building variant fixtures from parsed grids.
    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    fn index_of(&self, pos: Position) -> usize {
        let n = self.size.dimension();
        assert!(
            pos.row() < n && pos.col() < n,
            "position {pos} out of bounds for a {n}x{n} board"
        );
        usize::from(pos.row()) * usize::from(n) + usize::from(pos.col())
    }

    #[expect(clippy::cast_possible_truncation)]
    fn position_of(&self, index: usize) -> Position {
        let n = usize::from(self.size.dimension());
        Position::new((index / n) as u8, (index % n) as u8)
    }

    /// Returns the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds for this board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[self.index_of(pos)]
    }

    /// Returns the value at `pos`, or `None` when the cell is empty.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds for this board.
    #[must_use]
    pub fn value(&self, pos: Position) -> Option<u8> {
        self.cell(pos).value()
    }

    /// Fills `pos` with a non-given value.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds for this board.
    pub fn fill(&mut self, pos: Position, value: u8) {
        debug_assert!((1..=self.size.dimension()).contains(&value));
        let index = self.index_of(pos);
        self.cells[index] = Cell::filled(value);
    }

    /// Places a given value at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds or `value` is outside
    /// `1..=dimension`.
    pub fn place_given(&mut self, pos: Position, value: u8) {
        assert!(
            (1..=self.size.dimension()).contains(&value),
            "value {value} out of range for a {n}x{n} board",
            n = self.size.dimension()
        );
        let index = self.index_of(pos);
        self.cells[index] = Cell::given(value);
    }

    /// Clears `pos`, removing both the value and the given flag.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds for this board.
    pub fn clear(&mut self, pos: Position) {
        let index = self.index_of(pos);
        self.cells[index] = Cell::EMPTY;
    }

    /// Marks every filled cell as given.
    pub fn mark_all_given(&mut self) {
        for cell in &mut self.cells {
            if let Some(value) = cell.value() {
                *cell = Cell::given(value);
            }
        }
    }

    /// Returns `true` if placing `value` at `pos` would violate no
    /// constraint of this board's variant.
    ///
    /// Checks the row, the column, the box containing `pos`, and — under
    /// [`Variant::Diagonal`], when `pos` lies on the main diagonal — the
    /// main diagonal. The cell at `pos` itself is excluded from the scans,
    /// so the predicate also holds for values already placed.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudokugen_core::{Board, Position};
    ///
    /// let board: Board = "
    ///     12 3_
    ///     __ __
    ///     __ __
    ///     __ 4_
    /// "
    /// .parse()?;
    ///
    /// // 4 is the only value left for row 0.
    /// assert!(board.is_valid(Position::new(0, 3), 4));
    /// assert!(!board.is_valid(Position::new(0, 3), 1));
    /// // Column 2 already holds a 4 further down.
    /// assert!(!board.is_valid(Position::new(1, 2), 4));
    /// # Ok::<(), sudokugen_core::ParseBoardError>(())
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds for this board.
    #[must_use]
    pub fn is_valid(&self, pos: Position, value: u8) -> bool {
        let n = self.size.dimension();
        debug_assert!((1..=n).contains(&value));

        for i in 0..n {
            let in_row = Position::new(pos.row(), i);
            if in_row != pos && self.value(in_row) == Some(value) {
                return false;
            }
            let in_col = Position::new(i, pos.col());
            if in_col != pos && self.value(in_col) == Some(value) {
                return false;
            }
        }

        let box_rows = self.size.box_rows();
        let box_cols = self.size.box_cols();
        let top = (pos.row() / box_rows) * box_rows;
        let left = (pos.col() / box_cols) * box_cols;
        for row in top..top + box_rows {
            for col in left..left + box_cols {
                let in_box = Position::new(row, col);
                if in_box != pos && self.value(in_box) == Some(value) {
                    return false;
                }
            }
        }

        if self.variant == Variant::Diagonal && pos.on_main_diagonal() {
            for i in 0..n {
                let on_diagonal = Position::new(i, i);
                if on_diagonal != pos && self.value(on_diagonal) == Some(value) {
                    return false;
                }
            }
        }

        true
    }

    /// Returns the transient candidate set at `pos`.
    ///
    /// For an empty cell this is every value accepted by [`is_valid`]
    /// given the current grid. A filled cell reports its own value as the
    /// single candidate. Candidates are recomputed on every call and never
    /// stored.
    ///
    /// [`is_valid`]: Self::is_valid
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds for this board.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> ValueSet {
        if let Some(value) = self.value(pos) {
            return ValueSet::single(value);
        }
        (1..=self.size.dimension())
            .filter(|&value| self.is_valid(pos, value))
            .collect()
    }

    /// Returns all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let n = self.size.dimension();
        (0..n).flat_map(move |row| (0..n).map(move |col| Position::new(row, col)))
    }

    /// Returns the first empty cell at or after the row-major index
    /// `start`, as `(index, position)`.
    ///
    /// The backtracking solver threads the returned index through its
    /// recursion so each level resumes the row-major scan where the
    /// previous one stopped.
    #[must_use]
    pub fn first_empty_from(&self, start: usize) -> Option<(usize, Position)> {
        self.cells[start..]
            .iter()
            .position(|cell| cell.is_empty())
            .map(|offset| (start + offset, self.position_of(start + offset)))
    }

    /// Returns the number of given cells.
    #[must_use]
    pub fn given_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_given()).count()
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns `true` if every cell is filled and no constraint of the
    /// board's variant is violated.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.positions().all(|pos| {
            self.value(pos)
                .is_some_and(|value| self.is_valid(pos, value))
        })
    }

    /// Returns the grid as dense rows of integers, with `0` for empty.
    ///
    /// This is the exchange format for callers that serialize solutions.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        let n = self.size.dimension();
        (0..n)
            .map(|row| {
                (0..n)
                    .map(|col| self.value(Position::new(row, col)).unwrap_or(0))
                    .collect()
            })
            .collect()
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        &self.cells[self.index_of(pos)]
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses a grid literal.
    ///
    /// Digits `1`-`9` are given cells; `.`, `_`, and `0` are empty;
    /// whitespace is ignored. The board size is inferred from the number of
    /// cells (16, 36, or 81) and the variant defaults to
    /// [`Variant::Classic`] — use [`Board::with_variant`] for variant
    /// fixtures.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = Vec::new();
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            match c {
                '.' | '_' | '0' => values.push(None),
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = c.to_digit(10).unwrap_or_default() as u8;
                    values.push(Some(value));
                }
                _ => return Err(ParseBoardError::UnexpectedChar { found: c }),
            }
        }

        let size = match values.len() {
            16 => BoardSize::Four,
            36 => BoardSize::Six,
            81 => BoardSize::Nine,
            count => return Err(ParseBoardError::CellCount { count }),
        };

        let mut board = Self::new(size, Variant::Classic);
        for (index, value) in values.into_iter().enumerate() {
            if let Some(value) = value {
                if value > size.dimension() {
                    return Err(ParseBoardError::ValueOutOfRange {
                        value,
                        dimension: size.dimension(),
                    });
                }
                let pos = board.position_of(index);
                board.place_given(pos, value);
            }
        }
        Ok(board)
    }
}

impl Display for Board {
    /// Formats the grid one row per line, `_` for empty cells, with a
    /// space between box column groups. The output parses back via
    /// [`FromStr`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size.dimension();
        let box_cols = self.size.box_cols();
        for row in 0..n {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..n {
                if col > 0 && col % box_cols == 0 {
                    write!(f, " ")?;
                }
                match self.value(Position::new(row, col)) {
                    Some(value) => write!(f, "{value}")?,
                    None => write!(f, "_")?,
                }
            }
        }
        Ok(())
    }
}

/// Error returned when a grid literal cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplayDerive, Error)]
pub enum ParseBoardError {
    /// A character that is neither a digit, an empty-cell marker, nor
    /// whitespace.
    #[display("unexpected character {found:?} in grid literal")]
    UnexpectedChar {
        /// The offending character.
        found: char,
    },
    /// The literal does not contain a supported number of cells.
    #[display("grid literal has {count} cells (expected 16, 36, or 81)")]
    CellCount {
        /// The number of cells found.
        count: usize,
    },
    /// A digit exceeds the inferred board dimension.
    #[display("value {value} out of range for a {dimension}x{dimension} board")]
    ValueOutOfRange {
        /// The offending value.
        value: u8,
        /// The inferred board dimension.
        dimension: u8,
    },
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// Filling cells only when the predicate accepts them can never
        /// produce a grid the predicate later rejects.
        #[test]
        fn predicate_guarded_fills_stay_consistent(
            placements in proptest::collection::vec((0..81usize, 1..=9u8), 0..60),
        ) {
            let mut board = Board::new(BoardSize::Nine, Variant::Classic);
            for (index, value) in placements {
                #[expect(clippy::cast_possible_truncation)]
                let pos = Position::new((index / 9) as u8, (index % 9) as u8);
                if board.value(pos).is_none() && board.is_valid(pos, value) {
                    board.fill(pos, value);
                }
            }
            for pos in board.positions() {
                if let Some(value) = board.value(pos) {
                    prop_assert!(board.is_valid(pos, value));
                    prop_assert_eq!(board.candidates_at(pos).as_single(), Some(value));
                }
            }
        }

        /// Display output reparses to the same cell values.
        #[test]
        fn display_round_trips_values(
            placements in proptest::collection::vec((0..36usize, 1..=6u8), 0..30),
        ) {
            let mut board = Board::new(BoardSize::Six, Variant::Classic);
            for (index, value) in placements {
                #[expect(clippy::cast_possible_truncation)]
                let pos = Position::new((index / 6) as u8, (index % 6) as u8);
                if board.value(pos).is_none() && board.is_valid(pos, value) {
                    board.fill(pos, value);
                }
            }
            let reparsed: Board = board.to_string().parse().unwrap();
            prop_assert_eq!(reparsed.to_rows(), board.to_rows());
        }
    }
}
