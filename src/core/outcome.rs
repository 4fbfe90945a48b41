//! Round outcome from the player's point of view.

use serde::{Deserialize, Serialize};

/// Result of comparing two choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    /// The same round seen from the other side of the table.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }

    /// Console announcement for this outcome.
    #[must_use]
    pub const fn announcement(self) -> &'static str {
        match self {
            Outcome::Win => "You win!",
            Outcome::Lose => "You lose!",
            Outcome::Tie => "It's a tie!",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => f.write_str("win"),
            Outcome::Lose => f.write_str("lose"),
            Outcome::Tie => f.write_str("tie"),
        }
    }
}
