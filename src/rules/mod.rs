//! Rules for comparing choices.
//!
//! `BeatsTable` holds the static "who beats whom" relation; `RulesEngine`
//! resolves a pairing against it. The game loop calls into `RulesEngine`
//! and never consults a table directly.

pub mod beats;
pub mod engine;

pub use beats::{BeatsTable, Edge};
pub use engine::{RulesEngine, StandardRules};
