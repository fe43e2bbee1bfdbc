//! Output encoding: digest bytes ↔ standard base64

use base64::{engine::general_purpose::STANDARD as B64, Engine as _};
use crate::core::duration::format_duration;
use crate::core::primitive::{Bcrypt, HashPrimitive};
use crate::types::{CalibrationResult, HashError, Secret, VerifyOutcome};

/// Digest as printable text
pub fn encode_digest(digest: &[u8]) -> String {
    B64.encode(digest)
}

/// Printable text back to digest bytes
pub fn decode_digest(encoded: &str) -> Result<Vec<u8>, HashError> {
    B64.decode(encoded.trim())
        .map_err(|e| HashError::Encoding(e.to_string()))
}

/// The `Hash: <base64>` output line
pub fn hash_line(result: &CalibrationResult) -> String {
    format!("Hash: {}", encode_digest(&result.digest))
}

/// Calibration diagnostic printed above the hash line.
///
/// `None` on the fixed-cost path: the difficulty was dictated, not measured.
pub fn diagnostic_line(result: &CalibrationResult) -> Option<String> {
    if !result.is_calibrated() {
        return None;
    }
    if result.met_threshold {
        let elapsed = result.elapsed.map(format_duration).unwrap_or_default();
        Some(format!("Using difficulty {} with time {}", result.cost, elapsed))
    } else {
        let target = result.target.map(format_duration).unwrap_or_default();
        Some(format!(
            "Could not find a difficulty enough for {} - using highest difficulty {}",
            target, result.cost
        ))
    }
}

/// Check `secret` against base64 text produced by `encode_digest`
pub fn verify_encoded<P: HashPrimitive>(
    primitive: &P,
    secret: Secret,
    encoded: &str,
) -> Result<VerifyOutcome, HashError> {
    let digest = decode_digest(encoded)?;
    let valid = primitive.verify(secret.expose(), &digest)?;
    Ok(VerifyOutcome {
        valid,
        cost: primitive.cost_of(&digest),
    })
}

/// `verify_encoded` with bcrypt
pub fn verify(secret: Secret, encoded: &str) -> Result<VerifyOutcome, HashError> {
    verify_encoded(&Bcrypt, secret, encoded)
}

// =============================================================================
// TESTS
// =============================================================================
