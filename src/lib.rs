//! # rps-lab
//!
//! Rock-Paper-Scissors(-Lizard-Spock) against the computer, plus small
//! demonstrations of summation, sets and short-circuit evaluation.
//!
//! ## Design Principles
//!
//! 1. **Static Rules**: The beats table is built once per variant and never
//!    mutated. Custom tables are validated before use.
//!
//! 2. **No Undefined Lookups**: Resolving a choice outside the active variant
//!    is an error, not a panic.
//!
//! 3. **Reproducible Opponent**: The computer draws from a seedable ChaCha8
//!    RNG; unseeded games log the seed they picked.
//!
//! ## Modules
//!
//! - `core`: Choices, outcomes, RNG, configuration, errors
//! - `rules`: Beats tables and the `RulesEngine` trait
//! - `games`: Single rounds, series and the interactive loops
//! - `console`: Prompting over terminals, pipes and test buffers
//! - `demos`: Summation, set and short-circuit demonstrations

pub mod core;
pub mod rules;
pub mod games;
pub mod console;
pub mod demos;

// Re-export commonly used types
pub use crate::core::{
    Choice, Outcome,
    GameRng,
    GameConfig, SeriesFormat, Variant,
    Result, RpsError,
};

pub use crate::rules::{BeatsTable, Edge, RulesEngine, StandardRules};

pub use crate::games::{play_configured, play_series, play_single, Game, Played, Round, Score, Series, Side};

pub use crate::console::{LinePrompter, Prompter, TermPrompter};
