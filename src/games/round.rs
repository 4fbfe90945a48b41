//! A single round against the computer.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Choice, GameConfig, GameRng, Outcome, Result, RpsError};
use crate::rules::{RulesEngine, StandardRules};

/// Record of one played round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// What the player threw.
    pub player: Choice,
    /// What the computer threw.
    pub computer: Choice,
    /// Outcome for the player.
    pub outcome: Outcome,
}

/// Rules plus the RNG that drives the computer opponent.
#[derive(Clone, Debug)]
pub struct Game<R: RulesEngine = StandardRules> {
    rules: R,
    rng: GameRng,
}

impl Game<StandardRules> {
    /// Build a game from configuration.
    ///
    /// Without a configured seed the RNG is seeded from entropy; the seed
    /// is logged so the game can be replayed.
    pub fn from_config(config: &GameConfig) -> Self {
        let rng = GameRng::from_seed_or_entropy(config.seed);
        debug!("{} game seeded with {}", config.variant, rng.seed());
        Self::new(StandardRules::new(config.variant), rng)
    }
}

impl<R: RulesEngine> Game<R> {
    /// Create a game from rules and an RNG.
    pub fn new(rules: R, rng: GameRng) -> Self {
        Self { rules, rng }
    }

    /// The rules in use.
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Seed of the computer's RNG.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Draw the computer's choice uniformly from the legal choices.
    pub fn computer_choice(&mut self) -> Result<Choice> {
        self.rng
            .choose(self.rules.legal_choices())
            .ok_or_else(|| RpsError::MalformedTable("no choices to draw from".to_string()))
    }

    /// Play one round: draw the computer's choice and resolve.
    pub fn play(&mut self, player: Choice) -> Result<Round> {
        self.rules.check(player)?;
        let computer = self.computer_choice()?;
        self.play_against(player, computer)
    }

    /// Resolve a round with both choices given.
    pub fn play_against(&self, player: Choice, computer: Choice) -> Result<Round> {
        let outcome = self.rules.resolve(player, computer)?;
        Ok(Round {
            player,
            computer,
            outcome,
        })
    }

    /// Sentence naming how the round was decided, if it was decisive.
    pub fn describe(&self, round: &Round) -> Option<String> {
        self.rules.table().describe(round.player, round.computer)
    }
}
