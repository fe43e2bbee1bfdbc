//! Hashing primitive boundary
//!
//! The calibrator only needs the cost bounds and a way to hash once at a
//! given cost. Latency is assumed to grow monotonically with cost.

use std::ops::RangeInclusive;
use bcrypt::BcryptError;
use crate::{MIN_COST, MAX_COST};
use crate::types::HashError;

/// A salted, adaptive one-way password hash
pub trait HashPrimitive {
    /// Valid cost parameters, inclusive
    fn cost_range(&self) -> RangeInclusive<u32>;

    /// Hash `secret` at `cost`; the digest embeds the cost and salt
    fn hash(&self, secret: &[u8], cost: u32) -> Result<Vec<u8>, HashError>;

    /// Check `secret` against a digest produced by `hash`
    fn verify(&self, secret: &[u8], digest: &[u8]) -> Result<bool, HashError>;

    /// Cost embedded in a digest
    fn cost_of(&self, digest: &[u8]) -> Option<u32>;

    /// Reject costs outside `cost_range` without hashing
    fn check_cost(&self, cost: u32) -> Result<(), HashError> {
        let range = self.cost_range();
        if range.contains(&cost) {
            Ok(())
        } else {
            Err(HashError::InvalidCost {
                cost,
                min: *range.start(),
                max: *range.end(),
            })
        }
    }
}

/// bcrypt via the `bcrypt` crate, `$2b$` modular crypt output
#[derive(Debug, Clone, Copy, Default)]
pub struct Bcrypt;

impl Bcrypt {
    pub fn new() -> Self {
        Self
    }
}

impl HashPrimitive for Bcrypt {
    fn cost_range(&self) -> RangeInclusive<u32> {
        MIN_COST..=MAX_COST
    }

    fn hash(&self, secret: &[u8], cost: u32) -> Result<Vec<u8>, HashError> {
        match bcrypt::hash(secret, cost) {
            Ok(digest) => Ok(digest.into_bytes()),
            Err(BcryptError::CostNotAllowed(cost)) => Err(HashError::InvalidCost {
                cost,
                min: MIN_COST,
                max: MAX_COST,
            }),
            Err(e) => Err(HashError::Primitive {
                cost,
                message: e.to_string(),
            }),
        }
    }

    fn verify(&self, secret: &[u8], digest: &[u8]) -> Result<bool, HashError> {
        let digest = std::str::from_utf8(digest)
            .map_err(|_| HashError::Encoding("digest is not valid UTF-8".to_string()))?;
        bcrypt::verify(secret, digest).map_err(|e| HashError::Encoding(e.to_string()))
    }

    fn cost_of(&self, digest: &[u8]) -> Option<u32> {
        // $<version>$<cost>$<salt+hash>
        let digest = std::str::from_utf8(digest).ok()?;
        let mut parts = digest.split('$');
        if !parts.next()?.is_empty() {
            return None;
        }
        let _version = parts.next()?;
        parts.next()?.parse().ok()
    }
}

// =============================================================================
// TESTS
// =============================================================================
