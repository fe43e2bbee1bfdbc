//! Double-entry prompt states

use crate::types::Secret;

/// Outcome of one enter/repeat round
#[derive(Debug, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Both entries equal and non-empty
    Matched(Secret),
    /// Entries differ, ask again
    Mismatched,
    /// Either entry was empty, stop without hashing
    Empty,
    /// Terminal read failed, ask again
    ReadFailed(String),
}
