//! Core types for bcalib

mod error;
mod secret;
mod difficulty;
mod result;
mod prompt;
mod verify;

pub use error::HashError;
pub use secret::Secret;
pub use difficulty::{HashConfig, Difficulty};
pub use result::CalibrationResult;
pub use prompt::PromptOutcome;
pub use verify::VerifyOutcome;
