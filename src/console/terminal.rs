//! Interactive terminal prompts backed by dialoguer.

use std::io::ErrorKind;

use dialoguer::Input;

use crate::core::Result;

use super::prompter::Prompter;

/// Prompter for an attached terminal.
///
/// Line editing and history come from dialoguer; validation stays in the
/// shared prompt loops so piped and interactive play behave the same.
#[derive(Debug, Default)]
pub struct TermPrompter;

impl TermPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TermPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        // dialoguer appends its own separator
        let prompt = prompt.trim_end().trim_end_matches(':');
        let line = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .report(false)
            .interact_text();
        match line {
            Ok(line) => Ok(Some(line)),
            Err(err) => closed_input(err),
        }
    }

    fn say(&mut self, line: &str) -> Result<()> {
        println!("{}", line);
        Ok(())
    }
}

/// Ctrl-D at a dialoguer prompt surfaces as an EOF I/O error; treat it as
/// closed input like the line-based prompter does.
fn closed_input(err: dialoguer::Error) -> Result<Option<String>> {
    match err {
        dialoguer::Error::IO(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
        other => Err(other.into()),
    }
}
