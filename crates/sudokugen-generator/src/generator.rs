//! The puzzle generation facade.

use derive_more::{Display, Error};
use sudokugen_core::{BoardSize, Variant};
use sudokugen_solver::analyze;

use crate::{GeneratedPuzzle, GeneratorConfig, PuzzleSeed, fill, remover};

/// Label of the random stream that fills the solution grid.
const FILL_PHASE: &str = "solution-fill";
/// Label of the random stream that orders cell removal.
const REMOVAL_PHASE: &str = "cell-removal";

/// Generates puzzles for one [`GeneratorConfig`].
///
/// A generator is stateless between calls: each request derives its own
/// random streams from its seed and operates on its own grids, so a single
/// generator may serve concurrent callers without locking.
///
/// # Examples
///
/// ```
/// use sudokugen_core::{BoardSize, Difficulty};
/// use sudokugen_generator::{GeneratorConfig, PuzzleGenerator};
///
/// let config = GeneratorConfig::new(BoardSize::Nine, Difficulty::Easy);
/// let generator = PuzzleGenerator::new(config);
/// let puzzle = generator.generate()?;
///
/// assert_eq!(puzzle.stats.given_count() + puzzle.stats.empty_count(), 81);
/// assert!(puzzle.solution.is_solved());
/// # Ok::<(), sudokugen_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

impl PuzzleGenerator {
    /// Creates a generator for a configuration.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this generator serves.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// Successive calls produce different puzzles with overwhelming
    /// probability. The seed that was drawn is reported on the output for
    /// replay.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] on an internal invariant violation; see
    /// [`generate_with_seed`](Self::generate_with_seed).
    pub fn generate(&self) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The pipeline is: fill a complete solution grid (random seeding
    /// plus deterministic completion), derive the puzzle grid by
    /// clearing cells under the uniqueness constraint, analyze the result,
    /// and assemble the output snapshot. The same seed and configuration
    /// always produce the same puzzle.
    ///
    /// Under-removal — a puzzle easier than the removal table requested —
    /// is a normal outcome observable via `stats.empty_count()`, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Unfillable`] or
    /// [`GenerateError::LostSolutions`] on internal invariant violations.
    /// Both indicate a defect, not a recoverable condition: the request is
    /// logged and aborted with no partial state.
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> Result<GeneratedPuzzle, GenerateError> {
        let config = &self.config;

        let mut fill_rng = seed.stream(FILL_PHASE);
        let Some(solution) = fill::filled_board(config.size, config.variant, &mut fill_rng)
        else {
            log::error!(
                "no solution grid found for {:?}/{:?} within {} attempts",
                config.size,
                config.variant,
                fill::MAX_FILL_ATTEMPTS,
            );
            return Err(GenerateError::Unfillable {
                size: config.size,
                variant: config.variant,
            });
        };

        let mut problem = solution.clone();
        problem.mark_all_given();
        let mut removal_rng = seed.stream(REMOVAL_PHASE);
        let target = config.removal_target();
        let removed = remover::remove_cells(
            &mut problem,
            &solution,
            target,
            config.symmetrical,
            &mut removal_rng,
        )?;
        if removed < target {
            log::debug!("removed {removed} of {target} cells before exhausting candidates");
        }

        let stats = analyze(&problem);
        let hints = config.show_hints.then(|| stats.hints(config.difficulty));
        Ok(GeneratedPuzzle {
            problem,
            solution,
            difficulty: config.difficulty,
            symmetrical: config.symmetrical,
            stats,
            hints,
            time_estimate_minutes: stats.estimated_minutes(),
            seed,
            style: config.style.clone(),
        })
    }
}

/// Error returned when generation hits an internal invariant violation.
///
/// These are defects by construction, not runtime conditions to recover
/// from: generation is deterministic given its seed, so retrying the same
/// request cannot help, but generating with a fresh seed can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GenerateError {
    /// The fill phase found no complete solution grid within its attempt
    /// budget.
    #[display("no {size:?} solution grid found under {variant:?} rules")]
    Unfillable {
        /// The requested board size.
        size: BoardSize,
        /// The requested variant.
        variant: Variant,
    },
    /// A grid derived from a valid solution reported zero solutions.
    #[display("puzzle lost all solutions during cell removal")]
    LostSolutions,
}
