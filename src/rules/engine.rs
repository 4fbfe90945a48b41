//! Rules engine trait and the standard implementation.
//!
//! A rules engine knows which choices are in play and how to compare them:
//! - Which choices are legal
//! - Who wins a pairing
//! - How to describe a decisive pairing

use log::debug;

use crate::core::{Choice, Outcome, Result, RpsError, Variant};

use super::beats::BeatsTable;

/// Rules engine trait.
///
/// Implementors supply the variant and its beats table; resolution is
/// provided on top of those.
///
/// ## Implementation Notes
///
/// - `table` must be well formed (see `BeatsTable::from_edges`)
/// - `resolve` never panics: choices outside the variant are an error
pub trait RulesEngine {
    /// The variant being played.
    fn variant(&self) -> Variant;

    /// The beats table for this variant.
    fn table(&self) -> &BeatsTable;

    /// Legal choices, in display order.
    fn legal_choices(&self) -> &[Choice] {
        self.table().choices()
    }

    /// Check that a choice is played in this variant.
    fn check(&self, choice: Choice) -> Result<Choice> {
        if self.table().contains(choice) {
            Ok(choice)
        } else {
            Err(RpsError::NotInVariant {
                choice,
                variant: self.variant(),
            })
        }
    }

    /// Compare the player's choice against the opponent's.
    ///
    /// Equal choices tie; the player wins iff the opponent's choice is in
    /// the player's defeats-set; otherwise the player loses.
    fn resolve(&self, player: Choice, opponent: Choice) -> Result<Outcome> {
        self.check(player)?;
        self.check(opponent)?;

        let outcome = if player == opponent {
            Outcome::Tie
        } else if self.table().beats(player, opponent) {
            Outcome::Win
        } else {
            Outcome::Lose
        };

        debug!("resolved {} vs {}: {}", player, opponent, outcome);
        Ok(outcome)
    }
}

/// Built-in rules for the classic and extended variants.
#[derive(Clone, Debug)]
pub struct StandardRules {
    variant: Variant,
    table: BeatsTable,
}

impl StandardRules {
    /// Rules for the given variant.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            table: BeatsTable::for_variant(variant),
        }
    }
}

impl Default for StandardRules {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

impl RulesEngine for StandardRules {
    fn variant(&self) -> Variant {
        self.variant
    }

    fn table(&self) -> &BeatsTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rock_scenarios() {
        let rules = StandardRules::new(Variant::Extended);

        assert_eq!(rules.resolve(Choice::Rock, Choice::Scissors).unwrap(), Outcome::Win);
        assert_eq!(rules.resolve(Choice::Rock, Choice::Lizard).unwrap(), Outcome::Win);
        assert_eq!(rules.resolve(Choice::Rock, Choice::Paper).unwrap(), Outcome::Lose);
        assert_eq!(rules.resolve(Choice::Rock, Choice::Spock).unwrap(), Outcome::Lose);
        assert_eq!(rules.resolve(Choice::Rock, Choice::Rock).unwrap(), Outcome::Tie);
    }

    #[test]
    fn test_classic_rejects_extended_choices() {
        let rules = StandardRules::new(Variant::Classic);

        let err = rules.resolve(Choice::Lizard, Choice::Rock).unwrap_err();
        assert!(matches!(
            err,
            RpsError::NotInVariant { choice: Choice::Lizard, variant: Variant::Classic }
        ));
        assert!(rules.resolve(Choice::Rock, Choice::Spock).is_err());
        assert_eq!(rules.resolve(Choice::Paper, Choice::Rock).unwrap(), Outcome::Win);
    }

    #[test]
    fn test_legal_choices() {
        assert_eq!(StandardRules::new(Variant::Classic).legal_choices(), &Choice::CLASSIC);
        assert_eq!(StandardRules::default().legal_choices(), &Choice::ALL);
    }

    #[test]
    fn test_resolve_is_antisymmetric() {
        let rules = StandardRules::default();
        for a in Choice::ALL {
            for b in Choice::ALL {
                let forward = rules.resolve(a, b).unwrap();
                let backward = rules.resolve(b, a).unwrap();
                assert_eq!(forward, backward.reversed(), "{} vs {}", a, b);
            }
        }
    }
}
