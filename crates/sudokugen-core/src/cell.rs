//! A single board cell.

use serde::{Deserialize, Serialize};

/// One cell of a board: an optional value plus a `given` flag.
///
/// `None` means the cell is empty. A given cell is fixed and printed in the
/// puzzle; solver-filled cells are never given. Candidate values are not
/// stored here — they are recomputed on demand by
/// [`Board::candidates_at`](crate::Board::candidates_at).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct Cell {
    value: Option<u8>,
    given: bool,
}

impl Cell {
    /// An empty, non-given cell.
    pub const EMPTY: Self = Self {
        value: None,
        given: false,
    };

    /// Creates a given cell holding `value`.
    #[must_use]
    pub const fn given(value: u8) -> Self {
        Self {
            value: Some(value),
            given: true,
        }
    }

    /// Creates a filled, non-given cell holding `value`.
    #[must_use]
    pub const fn filled(value: u8) -> Self {
        Self {
            value: Some(value),
            given: false,
        }
    }

    /// Returns the cell value, or `None` when empty.
    #[must_use]
    pub const fn value(self) -> Option<u8> {
        self.value
    }

    /// Returns `true` if the cell holds no value.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.value.is_none()
    }

    /// Returns `true` if the cell is a given.
    #[must_use]
    pub const fn is_given(self) -> bool {
        self.given
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Cell::EMPTY.value(), None);
        assert!(Cell::EMPTY.is_empty());
        assert!(!Cell::EMPTY.is_given());

        let given = Cell::given(5);
        assert_eq!(given.value(), Some(5));
        assert!(given.is_given());

        let filled = Cell::filled(5);
        assert_eq!(filled.value(), Some(5));
        assert!(!filled.is_given());
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(Cell::default(), Cell::EMPTY);
    }
}
