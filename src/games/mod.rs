//! Playing against the computer.
//!
//! - `round`: one throw each, resolved by the rules engine
//! - `series`: best-of-N and first-to-K tallies
//! - `session`: the interactive loops wiring prompts to rounds

pub mod round;
pub mod series;
pub mod session;

pub use round::{Game, Round};
pub use series::{Score, Series, Side};
pub use session::{play_configured, play_series, play_single, Played};
