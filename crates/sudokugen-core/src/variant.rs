//! Rule variants.

use std::str::FromStr;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// The rule set a board is played under.
///
/// The variant is fixed at board construction and consulted by
/// [`Board::is_valid`](crate::Board::is_valid), so generator, solver, and
/// analyzer all apply the same rules.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Row, column, and box constraints only.
    #[default]
    Classic,
    /// Classic constraints plus no repeats on the main diagonal.
    Diagonal,
}

impl Variant {
    /// Returns the lowercase tag used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Diagonal => "diagonal",
        }
    }
}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(Self::Classic),
            "diagonal" => Ok(Self::Diagonal),
            _ => Err(ParseVariantError {
                tag: s.to_owned(),
            }),
        }
    }
}

/// Error returned for an unrecognized variant tag.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unknown variant {tag:?} (expected \"classic\" or \"diagonal\")")]
pub struct ParseVariantError {
    /// The rejected tag.
    pub tag: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for variant in [Variant::Classic, Variant::Diagonal] {
            assert_eq!(variant.as_str().parse::<Variant>().unwrap(), variant);
        }
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let err = "antidiagonal".parse::<Variant>().unwrap_err();
        assert_eq!(err.tag, "antidiagonal");
    }
}
