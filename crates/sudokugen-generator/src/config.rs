//! Generation configuration.

use std::collections::BTreeMap;

use derive_more::{Display, Error, From};
use serde::Serialize;
use sudokugen_core::{BoardSize, Difficulty, SizeError, Variant};

/// The number of cells to remove, keyed by board size and difficulty.
///
/// Targets are a tuning parameter, not a correctness invariant: the cell
/// remover treats them as an upper bound and never gives up solution
/// uniqueness to reach one. The defaults are:
///
/// | size | easy | medium | hard | expert |
/// |------|------|--------|------|--------|
/// | 9×9  | 40   | 46     | 52   | 58     |
/// | 6×6  | 16   | 20     | 24   | 27     |
/// | 4×4  | 6    | 8      | 10   | 11     |
///
/// # Examples
///
/// ```
/// use sudokugen_core::{BoardSize, Difficulty};
/// use sudokugen_generator::RemovalTable;
///
/// let table = RemovalTable::default();
/// assert_eq!(table.target(BoardSize::Nine, Difficulty::Easy), 40);
///
/// let custom = table.with_target(BoardSize::Nine, Difficulty::Easy, 36)?;
/// assert_eq!(custom.target(BoardSize::Nine, Difficulty::Easy), 36);
/// # Ok::<(), sudokugen_generator::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovalTable {
    targets: [[usize; 4]; 3],
}

impl Default for RemovalTable {
    fn default() -> Self {
        // Rows: 4×4, 6×6, 9×9; columns: easy, medium, hard, expert.
        Self {
            targets: [[6, 8, 10, 11], [16, 20, 24, 27], [40, 46, 52, 58]],
        }
    }
}

impl RemovalTable {
    const fn size_index(size: BoardSize) -> usize {
        match size {
            BoardSize::Four => 0,
            BoardSize::Six => 1,
            BoardSize::Nine => 2,
        }
    }

    const fn difficulty_index(difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
            Difficulty::Expert => 3,
        }
    }

    /// Returns the target removal count for a size and difficulty.
    #[must_use]
    pub const fn target(&self, size: BoardSize, difficulty: Difficulty) -> usize {
        self.targets[Self::size_index(size)][Self::difficulty_index(difficulty)]
    }

    /// Returns a table with one target replaced.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRemovalTarget`] unless
    /// `1 <= target < cell count`; a non-positive or board-clearing target
    /// is rejected before any search begins.
    pub fn with_target(
        mut self,
        size: BoardSize,
        difficulty: Difficulty,
        target: usize,
    ) -> Result<Self, ConfigError> {
        if target == 0 || target >= size.cell_count() {
            return Err(ConfigError::InvalidRemovalTarget {
                size,
                difficulty,
                target,
            });
        }
        self.targets[Self::size_index(size)][Self::difficulty_index(difficulty)] = target;
        Ok(self)
    }
}

/// Configuration for one generation request.
///
/// Built with [`GeneratorConfig::new`] plus `with_*` methods; everything
/// not set explicitly keeps its default. The `style` map is opaque
/// passthrough data (colors, fonts) copied verbatim onto the output
/// puzzle; it has no effect on generation.
///
/// # Examples
///
/// ```
/// use sudokugen_core::{BoardSize, Difficulty, Variant};
/// use sudokugen_generator::GeneratorConfig;
///
/// let config = GeneratorConfig::new(BoardSize::Nine, Difficulty::Hard)
///     .with_variant(Variant::Diagonal)
///     .with_symmetry(true)
///     .with_hints(true);
/// assert_eq!(config.difficulty, Difficulty::Hard);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratorConfig {
    /// Board dimension.
    pub size: BoardSize,
    /// Requested difficulty tier.
    pub difficulty: Difficulty,
    /// Rule variant.
    pub variant: Variant,
    /// Remove cells in point-symmetric pairs.
    pub symmetrical: bool,
    /// Attach hint strings to the output.
    pub show_hints: bool,
    /// Opaque display settings passed through to the output.
    pub style: BTreeMap<String, String>,
    /// Removal targets per size and difficulty.
    pub removal: RemovalTable,
}

impl GeneratorConfig {
    /// Creates a configuration for a size and difficulty with all other
    /// options at their defaults.
    #[must_use]
    pub fn new(size: BoardSize, difficulty: Difficulty) -> Self {
        Self {
            size,
            difficulty,
            ..Self::default()
        }
    }

    /// Creates a configuration from a raw dimension, rejecting
    /// unsupported values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Size`] if `dimension` is not 4, 6, or 9.
    pub fn for_dimension(dimension: u8, difficulty: Difficulty) -> Result<Self, ConfigError> {
        Ok(Self::new(BoardSize::from_dimension(dimension)?, difficulty))
    }

    /// Sets the rule variant.
    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Enables or disables point-symmetric cell removal.
    #[must_use]
    pub fn with_symmetry(mut self, symmetrical: bool) -> Self {
        self.symmetrical = symmetrical;
        self
    }

    /// Enables or disables hint strings on the output.
    #[must_use]
    pub fn with_hints(mut self, show_hints: bool) -> Self {
        self.show_hints = show_hints;
        self
    }

    /// Sets the opaque display settings passed through to the output.
    #[must_use]
    pub fn with_style(mut self, style: BTreeMap<String, String>) -> Self {
        self.style = style;
        self
    }

    /// Replaces the removal table.
    #[must_use]
    pub fn with_removal_table(mut self, removal: RemovalTable) -> Self {
        self.removal = removal;
        self
    }

    /// Returns the target removal count this configuration requests.
    #[must_use]
    pub const fn removal_target(&self) -> usize {
        self.removal.target(self.size, self.difficulty)
    }
}

/// Error returned for an invalid generation configuration.
///
/// Configuration errors surface before any search begins; they are never
/// silently coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum ConfigError {
    /// The requested board dimension is unsupported.
    #[display("{_0}")]
    Size(SizeError),
    /// A removal target is zero or would clear the whole board.
    #[from(ignore)]
    #[display(
        "removal target {target} out of range for {size:?}/{difficulty} \
         (expected 1..{})",
        size.cell_count()
    )]
    InvalidRemovalTarget {
        /// The board size the target was set for.
        size: BoardSize,
        /// The difficulty the target was set for.
        difficulty: Difficulty,
        /// The rejected target.
        target: usize,
    },
}
