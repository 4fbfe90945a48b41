//! Game configuration types.
//!
//! A game is configured at startup by providing:
//! - `Variant`: which choices are in play (classic or extended)
//! - `SeriesFormat`: how many rounds decide a series
//! - `GameConfig`: combines both with an optional RNG seed
//!
//! Nothing here is mutated once play begins.

use serde::{Deserialize, Serialize};

use super::error::{Result, RpsError};
use super::Choice;

/// Which set of choices the game uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Rock, paper, scissors.
    Classic,
    /// Rock, paper, scissors, lizard, spock.
    #[default]
    Extended,
}

impl Variant {
    /// Choices available in this variant, in display order.
    #[must_use]
    pub fn choices(self) -> &'static [Choice] {
        match self {
            Variant::Classic => &Choice::CLASSIC,
            Variant::Extended => &Choice::ALL,
        }
    }

    /// Check whether a choice is played in this variant.
    #[must_use]
    pub fn contains(self, choice: Choice) -> bool {
        self.choices().contains(&choice)
    }

    /// Banner printed when a game starts.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Variant::Classic => "Rock, Paper, Scissors",
            Variant::Extended => "Rock, Paper, Scissors, Lizard, Spock",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Classic => f.write_str("classic"),
            Variant::Extended => f.write_str("extended"),
        }
    }
}

/// How a multi-round series is decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesFormat {
    /// Majority of `n` decisive rounds: first to `n / 2 + 1` wins.
    BestOf(u32),
    /// First side to reach `k` wins.
    FirstTo(u32),
}

impl SeriesFormat {
    /// Best-of-`rounds`, rejecting zero.
    pub fn best_of(rounds: u32) -> Result<Self> {
        if rounds == 0 {
            return Err(RpsError::InvalidRounds(rounds.to_string()));
        }
        Ok(SeriesFormat::BestOf(rounds))
    }

    /// First-to-`target`, rejecting zero.
    pub fn first_to(target: u32) -> Result<Self> {
        if target == 0 {
            return Err(RpsError::InvalidRounds(target.to_string()));
        }
        Ok(SeriesFormat::FirstTo(target))
    }

    /// Parse the answer to the round-count prompt.
    pub fn parse_best_of(input: &str) -> Result<Self> {
        let rounds = input
            .trim()
            .parse::<u32>()
            .map_err(|_| RpsError::InvalidRounds(input.trim().to_string()))?;
        Self::best_of(rounds)
    }

    /// Wins needed to take the series.
    #[must_use]
    pub const fn target(self) -> u32 {
        match self {
            SeriesFormat::BestOf(n) => n / 2 + 1,
            SeriesFormat::FirstTo(k) => k,
        }
    }
}

impl std::fmt::Display for SeriesFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesFormat::BestOf(n) => write!(f, "best of {}", n),
            SeriesFormat::FirstTo(k) => write!(f, "first to {}", k),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Choices in play.
    pub variant: Variant,

    /// RNG seed for the computer's choices. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Series format. `None` plays a single round.
    pub format: Option<SeriesFormat>,
}

impl GameConfig {
    /// Create a config for the extended single-round game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the variant.
    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Play a series instead of a single round.
    #[must_use]
    pub fn with_format(mut self, format: SeriesFormat) -> Self {
        self.format = Some(format);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_choices() {
        assert_eq!(Variant::Classic.choices().len(), 3);
        assert_eq!(Variant::Extended.choices().len(), 5);
        assert!(Variant::Extended.contains(Choice::Spock));
        assert!(!Variant::Classic.contains(Choice::Lizard));
        assert_eq!(Variant::default(), Variant::Extended);
    }

    #[test]
    fn test_best_of_target_is_majority() {
        assert_eq!(SeriesFormat::BestOf(1).target(), 1);
        assert_eq!(SeriesFormat::BestOf(3).target(), 2);
        assert_eq!(SeriesFormat::BestOf(4).target(), 3);
        assert_eq!(SeriesFormat::BestOf(5).target(), 3);
        assert_eq!(SeriesFormat::FirstTo(7).target(), 7);
    }

    #[test]
    fn test_zero_rounds_rejected() {
        assert!(matches!(SeriesFormat::best_of(0), Err(RpsError::InvalidRounds(_))));
        assert!(matches!(SeriesFormat::first_to(0), Err(RpsError::InvalidRounds(_))));
    }

    #[test]
    fn test_parse_best_of() {
        assert_eq!(SeriesFormat::parse_best_of(" 5\n").unwrap(), SeriesFormat::BestOf(5));
        assert!(matches!(
            SeriesFormat::parse_best_of("three"),
            Err(RpsError::InvalidRounds(ref s)) if s == "three"
        ));
        assert!(SeriesFormat::parse_best_of("-1").is_err());
    }

    #[test]
    fn test_game_config_builder() {
        let config = GameConfig::new()
            .with_variant(Variant::Classic)
            .with_seed(7)
            .with_format(SeriesFormat::BestOf(3));

        assert_eq!(config.variant, Variant::Classic);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.format, Some(SeriesFormat::BestOf(3)));

        let default = GameConfig::new();
        assert_eq!(default.variant, Variant::Extended);
        assert!(default.seed.is_none());
        assert!(default.format.is_none());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(SeriesFormat::BestOf(5).to_string(), "best of 5");
        assert_eq!(SeriesFormat::FirstTo(3).to_string(), "first to 3");
    }
}
