//! Interactive fallback for arguments missing from the command line.
//!
//! A prompt never ends the process. Quitting (or closing stdin) comes back
//! as [`Answer::Cancelled`] and the dispatcher decides what to do with it.

use std::io::{self, BufRead, Write};

use crate::error::Result;

/// Outcome of asking the user for a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer<T> {
    Provided(T),
    Cancelled,
}

/// Source of values for arguments the user left out
pub trait Prompt {
    /// Ask for free text.
    fn text(&mut self, message: &str) -> Result<Answer<String>>;

    /// Ask for a task id, asking again until the answer is a number.
    fn id(&mut self, message: &str) -> Result<Answer<u64>>;
}

/// Line-oriented prompt over any reader/writer pair
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
    quit: String,
}

impl LinePrompt<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on the terminal. Questions go to stderr so stdout stays clean.
    pub fn stdio(quit: impl Into<String>) -> Self {
        Self::new(io::stdin().lock(), io::stderr(), quit)
    }
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W, quit: impl Into<String>) -> Self {
        Self {
            input,
            output,
            quit: quit.into(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, message: &str) -> Result<Answer<String>> {
        write!(self.output, "{message} ['{}' for exit]: ", self.quit)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::debug!("prompt input closed");
            return Ok(Answer::Cancelled);
        }

        let answer = line.trim_end_matches(['\r', '\n']);
        if answer.trim() == self.quit {
            return Ok(Answer::Cancelled);
        }
        Ok(Answer::Provided(answer.to_string()))
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn text(&mut self, message: &str) -> Result<Answer<String>> {
        self.ask(message)
    }

    fn id(&mut self, message: &str) -> Result<Answer<u64>> {
        let mut message = message;
        loop {
            let answer = match self.ask(message)? {
                Answer::Provided(answer) => answer,
                Answer::Cancelled => return Ok(Answer::Cancelled),
            };
            if let Ok(id) = answer.trim().parse::<u64>() {
                return Ok(Answer::Provided(id));
            }
            message = "Invalid id, please enter again";
        }
    }
}
