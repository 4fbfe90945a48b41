//! The hand shapes a player can throw.
//!
//! ## Parsing
//!
//! Console input is normalized before matching: surrounding whitespace is
//! trimmed and case is ignored.
//!
//! ```
//! use rps_lab::core::Choice;
//!
//! assert_eq!("  Spock ".parse::<Choice>().unwrap(), Choice::Spock);
//! assert!("well".parse::<Choice>().is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::RpsError;

/// One member of the rock/paper/scissors/lizard/spock enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

impl Choice {
    /// Every choice, in the order the game lists them.
    pub const ALL: [Choice; 5] = [
        Choice::Rock,
        Choice::Paper,
        Choice::Scissors,
        Choice::Lizard,
        Choice::Spock,
    ];

    /// The three choices of the classic game.
    pub const CLASSIC: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Lowercase name, as typed at the prompt.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
            Choice::Lizard => "lizard",
            Choice::Spock => "spock",
        }
    }

    /// Capitalized name for the start of a sentence.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
            Choice::Lizard => "Lizard",
            Choice::Spock => "Spock",
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Choice {
    type Err = RpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Choice::ALL
            .iter()
            .copied()
            .find(|c| c.name() == normalized)
            .ok_or_else(|| RpsError::UnknownChoice(s.trim().to_string()))
    }
}
