//! Multi-round series with a running score.
//!
//! A series ends as soon as either side reaches the format's target.
//! Ties are counted but never move either side toward the target.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Outcome, Result, RpsError, SeriesFormat};

use super::round::Round;

/// Side of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Computer,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => f.write_str("Player"),
            Side::Computer => f.write_str("Computer"),
        }
    }
}

/// Running tally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub computer: u32,
    pub ties: u32,
}

impl Score {
    fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.player += 1,
            Outcome::Lose => self.computer += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player: {}, Computer: {}", self.player, self.computer)
    }
}

/// A best-of-N or first-to-K series.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Series {
    format: SeriesFormat,
    score: Score,
    history: Vec<Round>,
}

impl Series {
    /// Start an empty series.
    pub fn new(format: SeriesFormat) -> Self {
        Self {
            format,
            score: Score::default(),
            history: Vec::new(),
        }
    }

    pub fn format(&self) -> SeriesFormat {
        self.format
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Every round played so far, ties included.
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    /// Wins needed to take the series.
    pub fn target(&self) -> u32 {
        self.format.target()
    }

    /// The side that reached the target, if any.
    pub fn winner(&self) -> Option<Side> {
        let target = self.target();
        if self.score.player >= target {
            Some(Side::Player)
        } else if self.score.computer >= target {
            Some(Side::Computer)
        } else {
            None
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Add a played round to the tally.
    ///
    /// Fails with `SeriesFinished` once a side has reached the target.
    pub fn record(&mut self, round: Round) -> Result<Score> {
        if self.is_over() {
            return Err(RpsError::SeriesFinished);
        }

        self.score.add(round.outcome);
        self.history.push(round);
        debug!("round {} of {}: {} ({})", self.history.len(), self.format, round.outcome, self.score);

        if let Some(side) = self.winner() {
            debug!("series {} decided for {}", self.format, side);
        }
        Ok(self.score)
    }
}
