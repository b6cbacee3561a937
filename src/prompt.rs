//! Blocking line-based prompts.
//!
//! Invalid input is handled here by re-prompting, so callers only ever see
//! validated values or [`PromptError`].

use crate::error::PromptError;
use colored::Colorize;
use std::io::{BufRead, ErrorKind, Write};
use tracing::debug;

/// Where answers come from, one line at a time.
pub trait LineSource {
    /// Next line without its terminator, `None` at end of input.
    /// A user interrupt surfaces as [`PromptError::Interrupted`].
    fn next_line(&mut self) -> Result<Option<String>, PromptError>;
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> Result<Option<String>, PromptError> {
        let mut line = String::new();
        match self.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line.trim_end_matches(['\r', '\n']).to_string())),
            Err(e) if e.kind() == ErrorKind::Interrupted => Err(PromptError::Interrupted),
            Err(e) => Err(e.into()),
        }
    }
}

/// Input collaborator used by the session.
pub trait Prompt {
    /// Ask until the answer is one of `choices`.
    fn choice(&mut self, prompt: &str, choices: &[&str]) -> Result<String, PromptError>;

    /// Ask until a non-empty answer is given.
    fn text(&mut self, prompt: &str) -> Result<String, PromptError>;

    /// Ask until the answer parses as an integer. An empty answer yields
    /// `default` when one is given.
    fn integer(&mut self, prompt: &str, default: Option<i64>) -> Result<i64, PromptError>;

    /// Wait for an acknowledgment keypress (Enter).
    fn pause(&mut self, prompt: &str) -> Result<(), PromptError>;
}

/// [`Prompt`] over any line source and writer; [`crate::terminal::TerminalInput`]
/// and stdout in the binary.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: LineSource, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompt and hand back its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        // End of input (Ctrl-D) ends the session like an interrupt.
        self.input.next_line()?.ok_or(PromptError::Interrupted)
    }

    fn reject(&mut self, message: &str) -> Result<(), PromptError> {
        debug!(reason = message, "Rejected input");
        writeln!(self.output, "{}", message.red())?;
        Ok(())
    }
}

impl<R: LineSource, W: Write> Prompt for LinePrompt<R, W> {
    fn choice(&mut self, prompt: &str, choices: &[&str]) -> Result<String, PromptError> {
        let full = format!("{} {}: ", prompt, format!("[{}]", choices.join("/")).magenta().bold());
        loop {
            let answer = self.ask(&full)?;
            let answer = answer.trim();
            if choices.contains(&answer) {
                return Ok(answer.to_string());
            }
            self.reject("Please select one of the available options")?;
        }
    }

    fn text(&mut self, prompt: &str) -> Result<String, PromptError> {
        let full = format!("{}: ", prompt);
        loop {
            let answer = self.ask(&full)?;
            if !answer.trim().is_empty() {
                return Ok(answer);
            }
            self.reject("Value cannot be empty")?;
        }
    }

    fn integer(&mut self, prompt: &str, default: Option<i64>) -> Result<i64, PromptError> {
        let full = match default {
            Some(d) => format!("{} {}: ", prompt, format!("({})", d).cyan().bold()),
            None => format!("{}: ", prompt),
        };
        loop {
            let answer = self.ask(&full)?;
            let answer = answer.trim();
            match (answer.is_empty(), default) {
                (true, Some(d)) => return Ok(d),
                _ => match answer.parse::<i64>() {
                    Ok(value) => return Ok(value),
                    Err(_) => self.reject("Please enter a valid integer number")?,
                },
            }
        }
    }

    fn pause(&mut self, prompt: &str) -> Result<(), PromptError> {
        self.ask(&format!("{}: ", prompt))?;
        Ok(())
    }
}
