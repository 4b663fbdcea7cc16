//! Interactive question/answer loop.
//!
//! Answers are lower-cased and trimmed. A comma turns the answer into a list
//! whose every token must be allowed. Typing `end` at any prompt ends the
//! program (`AppError::Aborted`).

use crate::errors::{AppError, AppResult};
use std::io::{BufRead, Write};
use tracing::debug;

/// Typed at any prompt to leave the program.
pub const SENTINEL: &str = "end";

pub const RETRY_TEXT: &str =
    "\nWrong input, Enter a valid option or type end if you would like to end program :\n>";

pub const YES_NO: [&str; 4] = ["y", "n", "yes", "no"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Single(String),
    Many(Vec<String>),
}

impl Answer {
    pub fn into_values(self) -> Vec<String> {
        match self {
            Answer::Single(v) => vec![v],
            Answer::Many(vs) => vs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Accepted(Answer),
    Rejected,
    Sentinel,
}

/// Check one raw line against the allowed values.
pub fn validate<S: AsRef<str>>(raw: &str, allowed: &[S]) -> Validation {
    let opt = raw.trim().to_lowercase();
    if opt == SENTINEL {
        return Validation::Sentinel;
    }

    let is_allowed = |token: &str| allowed.iter().any(|a| a.as_ref() == token);

    if opt.contains(',') {
        let tokens: Vec<String> = opt.split(',').map(|t| t.trim().to_string()).collect();
        if tokens.iter().all(|t| is_allowed(t)) {
            Validation::Accepted(Answer::Many(tokens))
        } else {
            Validation::Rejected
        }
    } else if is_allowed(&opt) {
        Validation::Accepted(Answer::Single(opt))
    } else {
        Validation::Rejected
    }
}

/// Reader/writer pair the whole session talks through.
pub struct Console<R, W> {
    input: R,
    output: W,
    max_attempts: Option<u32>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            max_attempts: None,
        }
    }

    /// Give up with `TooManyAttempts` after `max` rejected answers.
    pub fn with_max_attempts(mut self, max: Option<u32>) -> Self {
        self.max_attempts = max;
        self
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> AppResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input closed while waiting for an answer");
            return Err(AppError::InputClosed);
        }
        Ok(line)
    }

    /// Ask until the answer is valid (single value or comma list).
    pub fn ask<S: AsRef<str>>(&mut self, text: &str, allowed: &[S]) -> AppResult<Answer> {
        self.ask_until(text, allowed, Some)
    }

    /// Ask for exactly one allowed value; lists are rejected.
    pub fn ask_one<S: AsRef<str>>(&mut self, text: &str, allowed: &[S]) -> AppResult<String> {
        self.ask_until(text, allowed, |answer| match answer {
            Answer::Single(v) => Some(v),
            Answer::Many(_) => None,
        })
    }

    /// Yes/no question.
    pub fn confirm(&mut self, text: &str) -> AppResult<bool> {
        let answer = self.ask_one(text, &YES_NO[..])?;
        Ok(answer.starts_with('y'))
    }

    /// Re-ask until `accept` takes a validated answer.
    fn ask_until<S, T, F>(&mut self, text: &str, allowed: &[S], accept: F) -> AppResult<T>
    where
        S: AsRef<str>,
        F: Fn(Answer) -> Option<T>,
    {
        let mut prompt = text;
        let mut rejected: u32 = 0;

        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let line = self.read_line()?;
            match validate(&line, allowed) {
                Validation::Sentinel => return Err(AppError::Aborted),
                Validation::Accepted(answer) => {
                    if let Some(value) = accept(answer) {
                        return Ok(value);
                    }
                }
                Validation::Rejected => {}
            }

            rejected += 1;
            debug!(answer = line.trim(), rejected, "rejected answer");
            if let Some(max) = self.max_attempts
                && rejected >= max
            {
                return Err(AppError::TooManyAttempts(max));
            }
            prompt = RETRY_TEXT;
        }
    }
}
