//! Static "who beats whom" tables.
//!
//! A table maps each choice to the choices it defeats, with the verb used to
//! describe the win. Well-formed tables are irreflexive and give every pair
//! of distinct choices exactly one winner.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{Choice, Result, RpsError, Variant};

/// One winning edge: the owner of the edge defeats `loser`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub loser: Choice,
    pub verb: &'static str,
}

/// Mapping from each choice to the set of choices it defeats.
#[derive(Clone, Debug)]
pub struct BeatsTable {
    choices: SmallVec<[Choice; 5]>,
    defeats: FxHashMap<Choice, SmallVec<[Edge; 2]>>,
}

const CLASSIC_EDGES: [(Choice, &str, Choice); 3] = [
    (Choice::Rock, "crushes", Choice::Scissors),
    (Choice::Scissors, "cuts", Choice::Paper),
    (Choice::Paper, "covers", Choice::Rock),
];

const EXTENDED_EDGES: [(Choice, &str, Choice); 10] = [
    (Choice::Rock, "crushes", Choice::Scissors),
    (Choice::Rock, "crushes", Choice::Lizard),
    (Choice::Scissors, "cuts", Choice::Paper),
    (Choice::Scissors, "decapitates", Choice::Lizard),
    (Choice::Paper, "covers", Choice::Rock),
    (Choice::Paper, "disproves", Choice::Spock),
    (Choice::Lizard, "poisons", Choice::Spock),
    (Choice::Lizard, "eats", Choice::Paper),
    (Choice::Spock, "smashes", Choice::Scissors),
    (Choice::Spock, "vaporizes", Choice::Rock),
];

impl BeatsTable {
    /// Rock, paper, scissors.
    #[must_use]
    pub fn classic() -> Self {
        Self::build(&Choice::CLASSIC, &CLASSIC_EDGES)
    }

    /// Rock, paper, scissors, lizard, spock.
    #[must_use]
    pub fn extended() -> Self {
        Self::build(&Choice::ALL, &EXTENDED_EDGES)
    }

    /// The built-in table for a variant.
    #[must_use]
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Self::classic(),
            Variant::Extended => Self::extended(),
        }
    }

    /// Build a custom table, rejecting it unless it is well formed.
    ///
    /// Each edge is `(winner, verb, loser)`.
    pub fn from_edges(choices: &[Choice], edges: &[(Choice, &'static str, Choice)]) -> Result<Self> {
        let table = Self::build(choices, edges);
        table.validate(edges)?;
        Ok(table)
    }

    fn build(choices: &[Choice], edges: &[(Choice, &'static str, Choice)]) -> Self {
        let mut defeats: FxHashMap<Choice, SmallVec<[Edge; 2]>> = FxHashMap::default();
        for &choice in choices {
            defeats.entry(choice).or_default();
        }
        for &(winner, verb, loser) in edges {
            defeats.entry(winner).or_default().push(Edge { loser, verb });
        }
        Self {
            choices: choices.iter().copied().collect(),
            defeats,
        }
    }

    fn validate(&self, edges: &[(Choice, &'static str, Choice)]) -> Result<()> {
        for (i, &a) in self.choices.iter().enumerate() {
            if self.choices[..i].contains(&a) {
                return Err(RpsError::MalformedTable(format!("{} listed twice", a)));
            }
        }

        for &(winner, _, loser) in edges {
            if !self.choices.contains(&winner) || !self.choices.contains(&loser) {
                return Err(RpsError::MalformedTable(format!(
                    "edge {} -> {} uses a choice outside the table",
                    winner, loser
                )));
            }
            if winner == loser {
                return Err(RpsError::MalformedTable(format!("{} beats itself", winner)));
            }
        }

        for (i, &a) in self.choices.iter().enumerate() {
            for &b in &self.choices[i + 1..] {
                match (self.beats(a, b), self.beats(b, a)) {
                    (true, true) => {
                        return Err(RpsError::MalformedTable(format!(
                            "{} and {} beat each other",
                            a, b
                        )))
                    }
                    (false, false) => {
                        return Err(RpsError::MalformedTable(format!(
                            "no winner between {} and {}",
                            a, b
                        )))
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Choices covered by this table, in display order.
    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Check whether a choice appears in this table.
    #[must_use]
    pub fn contains(&self, choice: Choice) -> bool {
        self.choices.contains(&choice)
    }

    /// Choices that `choice` defeats.
    pub fn defeats(&self, choice: Choice) -> impl Iterator<Item = Choice> + '_ {
        self.defeats
            .get(&choice)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|e| e.loser))
    }

    /// Check whether `winner` defeats `loser`.
    #[must_use]
    pub fn beats(&self, winner: Choice, loser: Choice) -> bool {
        self.edge(winner, loser).is_some()
    }

    fn edge(&self, winner: Choice, loser: Choice) -> Option<&Edge> {
        self.defeats.get(&winner)?.iter().find(|e| e.loser == loser)
    }

    /// Verb describing how `winner` defeats `loser`.
    #[must_use]
    pub fn verb(&self, winner: Choice, loser: Choice) -> Option<&'static str> {
        self.edge(winner, loser).map(|e| e.verb)
    }

    /// Sentence describing a decisive pairing, e.g. "Rock crushes scissors."
    ///
    /// Order of the arguments does not matter. Returns `None` for a tie or
    /// for choices outside the table.
    #[must_use]
    pub fn describe(&self, a: Choice, b: Choice) -> Option<String> {
        let (winner, loser) = if self.beats(a, b) { (a, b) } else { (b, a) };
        let verb = self.verb(winner, loser)?;
        Some(format!("{} {} {}.", winner.title(), verb, loser))
    }
}
