//! Secret Acquisition: direct value or confirmed double entry
//!
//! Round outcomes:
//! - Matched    → done, secret returned
//! - Mismatched → message, ask again
//! - Empty      → "No password, exiting", stop without a secret
//! - ReadFailed → message, ask again (bounded by MAX_READ_FAILURES in a row)

use std::io::{self, Write};
use tracing::debug;
use crate::MAX_READ_FAILURES;
use crate::types::{HashError, PromptOutcome, Secret};

pub const PROMPT_ENTER: &str = "Enter Password: ";
pub const PROMPT_REPEAT: &str = "Repeat Password: ";
pub const MSG_NO_PASSWORD: &str = "No password, exiting";
pub const MSG_MISMATCH: &str = "Passwords do not match!";

/// Somewhere to read a hidden line from
pub trait SecretSource {
    fn read_secret(&mut self, prompt: &str) -> io::Result<String>;
}

/// Controlling terminal, input not echoed
#[derive(Debug, Default)]
pub struct TerminalSource;

impl SecretSource for TerminalSource {
    fn read_secret(&mut self, prompt: &str) -> io::Result<String> {
        rpassword::prompt_password(prompt)
    }
}

/// Double-entry prompt loop
pub struct SecretPrompt<S, W> {
    source: S,
    out: W,
    max_read_failures: u32,
}

impl SecretPrompt<TerminalSource, io::Stdout> {
    /// Prompt on the terminal, messages on stdout
    pub fn terminal() -> Self {
        Self::new(TerminalSource, io::stdout())
    }
}

impl<S: SecretSource, W: Write> SecretPrompt<S, W> {
    pub fn new(source: S, out: W) -> Self {
        Self {
            source,
            out,
            max_read_failures: MAX_READ_FAILURES,
        }
    }

    /// Override the consecutive read failure limit
    pub fn with_max_read_failures(mut self, max: u32) -> Self {
        self.max_read_failures = max.max(1);
        self
    }

    /// One enter/repeat round
    pub fn round(&mut self) -> PromptOutcome {
        let first = match self.source.read_secret(PROMPT_ENTER) {
            Ok(s) => Secret::from(s),
            Err(e) => return PromptOutcome::ReadFailed(e.to_string()),
        };
        if first.is_empty() {
            return PromptOutcome::Empty;
        }

        let second = match self.source.read_secret(PROMPT_REPEAT) {
            Ok(s) => Secret::from(s),
            Err(e) => return PromptOutcome::ReadFailed(e.to_string()),
        };
        if second.is_empty() {
            return PromptOutcome::Empty;
        }

        if first != second {
            return PromptOutcome::Mismatched;
        }
        PromptOutcome::Matched(first)
    }

    /// Run rounds until a terminal outcome.
    ///
    /// `Ok(None)` means the user entered nothing and the run should end
    /// quietly.
    pub fn acquire(&mut self) -> Result<Option<Secret>, HashError> {
        let mut failures = 0u32;

        loop {
            let outcome = self.round();
            debug!(outcome = outcome_name(&outcome), "prompt round");

            match outcome {
                PromptOutcome::Matched(secret) => return Ok(Some(secret)),
                PromptOutcome::Empty => {
                    self.say(MSG_NO_PASSWORD)?;
                    return Ok(None);
                }
                PromptOutcome::Mismatched => {
                    failures = 0;
                    self.say(MSG_MISMATCH)?;
                }
                PromptOutcome::ReadFailed(reason) => {
                    failures += 1;
                    if failures >= self.max_read_failures {
                        return Err(HashError::SecretInput(reason));
                    }
                    self.say(&reason)?;
                }
            }
        }
    }

    fn say(&mut self, line: &str) -> Result<(), HashError> {
        writeln!(self.out, "{}", line).map_err(|e| HashError::SecretInput(e.to_string()))
    }

    /// Consume the prompt, returning the message sink
    pub fn into_output(self) -> W {
        self.out
    }
}

fn outcome_name(outcome: &PromptOutcome) -> &'static str {
    match outcome {
        PromptOutcome::Matched(_) => "matched",
        PromptOutcome::Mismatched => "mismatched",
        PromptOutcome::Empty => "empty",
        PromptOutcome::ReadFailed(_) => "read_failed",
    }
}

/// Use `password` if given, otherwise prompt on the terminal
pub fn acquire_secret(password: Option<String>) -> Result<Option<Secret>, HashError> {
    match password.filter(|p| !p.is_empty()) {
        Some(p) => Ok(Some(Secret::from(p))),
        None => SecretPrompt::terminal().acquire(),
    }
}

// =============================================================================
// TESTS
// =============================================================================
