//! Line-oriented console I/O.
//!
//! Everything the game asks for goes through a `Prompter`, so the same
//! loops run against a terminal, a pipe, or a scripted buffer in tests.

use log::warn;
use std::io::{BufRead, Write};

use crate::core::{Choice, Result, RpsError, SeriesFormat};

/// Text shown when a typed choice is rejected.
pub const INVALID_CHOICE: &str = "Invalid choice. Please choose again.";

/// Source of console input and sink for console output.
pub trait Prompter {
    /// Show `prompt` and read one line. `None` means input is closed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Print one line of output.
    fn say(&mut self, line: &str) -> Result<()>;
}

/// Ask for a choice until one from `legal` is typed.
///
/// There is no retry cap; only closed input ends the loop early.
pub fn prompt_choice<P: Prompter + ?Sized>(prompter: &mut P, prompt: &str, legal: &[Choice]) -> Result<Choice> {
    loop {
        let line = prompter.read_line(prompt)?.ok_or(RpsError::InputClosed)?;
        match line.parse::<Choice>() {
            Ok(choice) if legal.contains(&choice) => return Ok(choice),
            _ => {
                warn!("rejected choice input {:?}", line.trim());
                prompter.say(INVALID_CHOICE)?;
            }
        }
    }
}

/// Ask for the length of a best-of series.
///
/// A non-numeric or zero answer is returned as `InvalidRounds`, not retried.
pub fn prompt_rounds<P: Prompter + ?Sized>(prompter: &mut P) -> Result<SeriesFormat> {
    let line = prompter
        .read_line("Best of how many rounds? ")?
        .ok_or(RpsError::InputClosed)?;
    SeriesFormat::parse_best_of(&line)
}

/// Prompter over any buffered reader and writer.
///
/// Prompts are written without a trailing newline, like a shell prompt.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }
}
