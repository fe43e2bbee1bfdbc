//! Calibration output

use base64::{engine::general_purpose::STANDARD as B64, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::time::Duration;

/// Outcome of one calibration run
#[derive(Debug, Clone, Serialize)]
pub struct CalibrationResult {
    /// When the result was produced
    pub timestamp: DateTime<Utc>,
    /// Cost the digest was computed at
    pub cost: u32,
    /// Primitive output (modular crypt string bytes for bcrypt)
    #[serde(serialize_with = "serialize_digest")]
    pub digest: Vec<u8>,
    /// Measured time of the chosen cost; `None` on the fixed-cost path
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Option<Duration>,
    /// Target the search compared against; `None` on the fixed-cost path
    #[serde(rename = "target_ms", serialize_with = "serialize_millis")]
    pub target: Option<Duration>,
    /// False only when every cost up to the maximum finished within the target
    pub met_threshold: bool,
    /// Number of primitive invocations
    pub probes: u32,
}

impl CalibrationResult {
    /// Result of the fixed-cost path
    pub fn fixed(cost: u32, digest: Vec<u8>) -> Self {
        Self {
            timestamp: Utc::now(),
            cost,
            digest,
            elapsed: None,
            target: None,
            met_threshold: true,
            probes: 1,
        }
    }

    /// Result of the adaptive path
    pub fn measured(
        cost: u32,
        digest: Vec<u8>,
        elapsed: Duration,
        target: Duration,
        met_threshold: bool,
        probes: u32,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            cost,
            digest,
            elapsed: Some(elapsed),
            target: Some(target),
            met_threshold,
            probes,
        }
    }

    /// Was the cost derived from timing?
    pub fn is_calibrated(&self) -> bool {
        self.elapsed.is_some()
    }
}

fn serialize_digest<S: Serializer>(digest: &[u8], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&B64.encode(digest))
}

fn serialize_millis<S: Serializer>(value: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(d) => s.serialize_some(&(d.as_nanos() as f64 / 1_000_000.0)),
        None => s.serialize_none(),
    }
}

// =============================================================================
// TESTS
// =============================================================================
