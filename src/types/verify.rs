//! Verification output

use serde::Serialize;

/// Result of checking a secret against an encoded digest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerifyOutcome {
    /// Secret matches the digest
    pub valid: bool,
    /// Cost embedded in the digest, if readable
    pub cost: Option<u32>,
}
