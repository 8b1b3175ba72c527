//! Difficulty tiers.

use std::fmt::{self, Display};
use std::str::FromStr;

use derive_more::Error;
use serde::{Deserialize, Serialize};

/// A requested difficulty tier.
///
/// Difficulty selects the target number of removed cells (via the
/// generator's removal table) and the verbosity of generated hints. It is a
/// request, not a guarantee: the generator never sacrifices solution
/// uniqueness to reach a tier's removal target.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Many givens, several forced cells.
    Easy,
    /// The default tier.
    #[default]
    Medium,
    /// Few givens.
    Hard,
    /// As few givens as uniqueness allows.
    Expert,
}

impl Difficulty {
    /// Array containing all tiers from easiest to hardest.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Returns the lowercase tag used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "expert" => Ok(Self::Expert),
            _ => Err(ParseDifficultyError {
                tag: s.to_owned(),
            }),
        }
    }
}

/// Error returned for an unrecognized difficulty tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ParseDifficultyError {
    /// The rejected tag.
    pub tag: String,
}

impl Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown difficulty {:?} (expected one of: easy, medium, hard, expert)",
            self.tag
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for difficulty in Difficulty::ALL {
            assert_eq!(
                difficulty.as_str().parse::<Difficulty>().unwrap(),
                difficulty
            );
            assert_eq!(difficulty.to_string(), difficulty.as_str());
        }
    }

    #[test]
    fn test_ordering_matches_tiers() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
        assert!(Difficulty::Hard < Difficulty::Expert);
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        assert!("nightmare".parse::<Difficulty>().is_err());
    }
}
