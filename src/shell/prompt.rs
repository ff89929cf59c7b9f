//! Line-oriented prompting

use std::fmt;
use std::io::{self, BufRead, Write};

/// Writes prompts and reads single-line answers
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line
    pub fn say(&mut self, message: impl fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{message}")?;
        self.output.flush()
    }

    /// Print `prompt` and read the answer without its line ending
    ///
    /// Returns `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let answer = line.trim_end_matches(&['\r', '\n'][..]);
        Ok(Some(answer.to_string()))
    }

    /// Ask until `parse` accepts the answer
    ///
    /// Each rejection message is printed before asking again. Returns `None`
    /// if input ends first.
    pub fn ask_until<T, F>(&mut self, prompt: &str, mut parse: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Result<T, String>,
    {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };

            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(message) => self.say(message)?,
            }
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
