//! Reproducible generation seeds.

use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use derive_more::{Display as DisplayDerive, Error};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use serde::{Serialize, Serializer};
use sha2::{Digest as _, Sha256};

/// A 32-byte seed that makes puzzle generation reproducible.
///
/// The same seed with the same configuration always yields the same
/// puzzle. Seeds print and parse as 64 lowercase hex characters, so they
/// can be logged next to a puzzle and replayed later.
///
/// Each generation phase (solution fill, cell removal) derives its own
/// random stream from the seed by hashing the seed bytes together with a
/// phase label, so a change in how one phase consumes randomness does not
/// perturb the other.
///
/// # Examples
///
/// ```
/// use sudokugen_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef".parse()?;
/// assert_eq!(
///     seed.to_string(),
///     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
/// );
/// # Ok::<(), sudokugen_generator::ParseSeedError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Draws a fresh random seed from the thread's entropy source.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0u8; 32];
        rand::rng().fill(&mut bytes);
        Self(bytes)
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derives the random stream for a generation phase.
    pub(crate) fn stream(&self, phase: &str) -> Pcg64 {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(phase.as_bytes());
        Pcg64::from_seed(hasher.finalize().into())
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl Debug for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PuzzleSeed({self})")
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(ParseSeedError::Length { len: s.len() });
        }
        let mut bytes = [0u8; 32];
        for (i, c) in s.chars().enumerate() {
            let Some(digit) = c.to_digit(16) else {
                return Err(ParseSeedError::InvalidChar { found: c });
            };
            #[expect(clippy::cast_possible_truncation)]
            let digit = digit as u8;
            bytes[i / 2] = bytes[i / 2] << 4 | digit;
        }
        Ok(Self(bytes))
    }
}

impl Serialize for PuzzleSeed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Error returned when a seed string cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplayDerive, Error)]
pub enum ParseSeedError {
    /// The string is not exactly 64 characters long.
    #[display("seed string has length {len} (expected 64 hex characters)")]
    Length {
        /// The rejected length.
        len: usize,
    },
    /// The string contains a non-hex character.
    #[display("invalid character {found:?} in seed string")]
    InvalidChar {
        /// The offending character.
        found: char,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_hex_round_trip() {
        let seed: PuzzleSeed = HEX.parse().unwrap();
        assert_eq!(seed.to_string(), HEX);
        assert_eq!(seed.to_string().parse::<PuzzleSeed>().unwrap(), seed);
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert_eq!(
            "abcd".parse::<PuzzleSeed>(),
            Err(ParseSeedError::Length { len: 4 })
        );
    }

    #[test]
    fn test_parse_rejects_bad_characters() {
        let with_bad_char = format!("g{}", &HEX[1..]);
        assert_eq!(
            with_bad_char.parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidChar { found: 'g' })
        );
    }

    #[test]
    fn test_random_seeds_differ() {
        // 256 bits of entropy; a collision here means the entropy source
        // is broken.
        assert_ne!(PuzzleSeed::random(), PuzzleSeed::random());
    }

    #[test]
    fn test_streams_are_phase_separated() {
        use rand::Rng as _;

        let seed: PuzzleSeed = HEX.parse().unwrap();
        let mut fill = seed.stream("fill");
        let mut removal = seed.stream("removal");
        assert_ne!(fill.next_u64(), removal.next_u64());

        // Same phase, same stream.
        let mut again = seed.stream("fill");
        let mut fill = seed.stream("fill");
        assert_eq!(fill.next_u64(), again.next_u64());
    }

    #[test]
    fn test_serializes_as_hex_string() {
        let seed: PuzzleSeed = HEX.parse().unwrap();
        assert_eq!(
            serde_json::to_value(seed).unwrap(),
            serde_json::Value::String(HEX.to_owned())
        );
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// Every seed survives the hex round trip.
        #[test]
        fn hex_round_trips(bytes in proptest::array::uniform32(any::<u8>())) {
            let seed = PuzzleSeed::from_bytes(bytes);
            let hex = seed.to_string();
            prop_assert_eq!(hex.len(), 64);
            prop_assert_eq!(hex.parse::<PuzzleSeed>().unwrap(), seed);
        }
    }
}
