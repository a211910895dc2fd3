//! Console Prompts
//! Line-based question/answer helpers that re-ask until the answer is usable.

use std::io::{BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input closed while waiting for an answer to: {0}")]
    Closed(String),
}

/// Reads answers from `input` and writes questions and complaints to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Where report text goes, shared with the questions.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `question` and return the trimmed answer line.
    pub fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed(question.trim().to_string()));
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts the answer, printing `complaint` after each rejection.
    pub fn ask_until<T, F>(
        &mut self,
        question: &str,
        complaint: &str,
        parse: F,
    ) -> Result<T, PromptError>
    where
        F: Fn(&str) -> Option<T>,
    {
        loop {
            let answer = self.ask(question)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            writeln!(self.output, "{complaint}")?;
        }
    }

    /// Ask a yes/no question until the answer is exactly "yes" or "no" (any case).
    pub fn yes_no(&mut self, question: &str, complaint: &str) -> Result<bool, PromptError> {
        self.ask_until(question, complaint, parse_yes_no)
    }
}

pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.to_lowercase().as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}
