//! Supported board dimensions.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A supported board dimension.
///
/// Boards are square. The box partition is 2×2 for 4×4 boards and 3×3 for
/// 9×9 boards; 6×6 boards use the conventional 2-row × 3-column boxes.
///
/// # Examples
///
/// ```
/// use sudokugen_core::BoardSize;
///
/// let size = BoardSize::Nine;
/// assert_eq!(size.dimension(), 9);
/// assert_eq!(size.box_rows(), 3);
/// assert_eq!(size.box_cols(), 3);
/// assert_eq!(size.cell_count(), 81);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BoardSize {
    /// A 4×4 board with 2×2 boxes.
    Four,
    /// A 6×6 board with 2×3 boxes.
    Six,
    /// A 9×9 board with 3×3 boxes, the default.
    #[default]
    Nine,
}

impl BoardSize {
    /// Array containing all supported sizes in ascending order.
    pub const ALL: [Self; 3] = [Self::Four, Self::Six, Self::Nine];

    /// Creates a size from a raw dimension.
    ///
    /// # Errors
    ///
    /// Returns [`SizeError`] if `dimension` is not 4, 6, or 9. Unsupported
    /// dimensions are rejected here, before any search begins.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudokugen_core::BoardSize;
    ///
    /// assert_eq!(BoardSize::from_dimension(6)?, BoardSize::Six);
    /// assert!(BoardSize::from_dimension(5).is_err());
    /// # Ok::<(), sudokugen_core::SizeError>(())
    /// ```
    pub fn from_dimension(dimension: u8) -> Result<Self, SizeError> {
        match dimension {
            4 => Ok(Self::Four),
            6 => Ok(Self::Six),
            9 => Ok(Self::Nine),
            _ => Err(SizeError { dimension }),
        }
    }

    /// Returns the number of rows (and columns) of the board.
    #[must_use]
    pub const fn dimension(self) -> u8 {
        match self {
            Self::Four => 4,
            Self::Six => 6,
            Self::Nine => 9,
        }
    }

    /// Returns the number of rows in one box.
    #[must_use]
    pub const fn box_rows(self) -> u8 {
        match self {
            Self::Four | Self::Six => 2,
            Self::Nine => 3,
        }
    }

    /// Returns the number of columns in one box.
    #[must_use]
    pub const fn box_cols(self) -> u8 {
        match self {
            Self::Four => 2,
            Self::Six | Self::Nine => 3,
        }
    }

    /// Returns the total number of cells on the board.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        let n = self.dimension() as usize;
        n * n
    }

    /// Returns the number of boxes that lie on the main diagonal of the
    /// box grid and therefore share no row or column with each other.
    #[must_use]
    pub const fn independent_box_count(self) -> u8 {
        let box_rows = self.dimension() / self.box_rows();
        let box_cols = self.dimension() / self.box_cols();
        if box_rows < box_cols { box_rows } else { box_cols }
    }
}

/// Error returned for a dimension outside the supported set {4, 6, 9}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("unsupported board dimension: {dimension} (supported: 4, 6, 9)")]
pub struct SizeError {
    /// The rejected dimension.
    pub dimension: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dimension_round_trip() {
        for size in BoardSize::ALL {
            assert_eq!(BoardSize::from_dimension(size.dimension()), Ok(size));
        }
    }

    #[test]
    fn test_from_dimension_rejects_unsupported() {
        for dimension in [0, 1, 2, 3, 5, 7, 8, 10, 16, 255] {
            let err = BoardSize::from_dimension(dimension).unwrap_err();
            assert_eq!(err.dimension, dimension);
        }
    }

    #[test]
    fn test_box_shape_tiles_the_board() {
        for size in BoardSize::ALL {
            assert_eq!(size.dimension() % size.box_rows(), 0);
            assert_eq!(size.dimension() % size.box_cols(), 0);
            // One box holds exactly one full set of values.
            assert_eq!(
                u16::from(size.box_rows()) * u16::from(size.box_cols()),
                u16::from(size.dimension())
            );
        }
    }

    #[test]
    fn test_independent_box_count() {
        assert_eq!(BoardSize::Four.independent_box_count(), 2);
        assert_eq!(BoardSize::Six.independent_box_count(), 2);
        assert_eq!(BoardSize::Nine.independent_box_count(), 3);
    }
}
