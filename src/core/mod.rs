//! Core types: choices, outcomes, RNG, configuration, errors.
//!
//! This module contains the building blocks shared by the rules and the
//! game loop. Games configure these via `GameConfig` rather than modifying
//! the core.

pub mod choice;
pub mod outcome;
pub mod rng;
pub mod config;
pub mod error;

pub use choice::Choice;
pub use outcome::Outcome;
pub use rng::GameRng;
pub use config::{GameConfig, SeriesFormat, Variant};
pub use error::{Result, RpsError};
