//! Board coordinates.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A 0-indexed (row, column) coordinate on a board.
///
/// Positions do not know the board dimension; boards validate them on
/// access.
///
/// # Examples
///
/// ```
/// use sudokugen_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position from row and column indices.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns `true` if this position lies on the main diagonal.
    #[must_use]
    pub const fn on_main_diagonal(self) -> bool {
        self.row == self.col
    }

    /// Returns the point reflection of this position through the center of
    /// an `dimension`×`dimension` board.
    ///
    /// The center cell of an odd-dimension board reflects onto itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudokugen_core::Position;
    ///
    /// assert_eq!(Position::new(0, 2).mirrored(9), Position::new(8, 6));
    /// assert_eq!(Position::new(4, 4).mirrored(9), Position::new(4, 4));
    /// ```
    #[must_use]
    pub const fn mirrored(self, dimension: u8) -> Self {
        Self {
            row: dimension - 1 - self.row,
            col: dimension - 1 - self.col,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}
