//! Console prompts for the interactive game.

pub mod prompter;
pub mod terminal;

pub use prompter::{prompt_choice, prompt_rounds, LinePrompter, Prompter, INVALID_CHOICE};
pub use terminal::TermPrompter;
