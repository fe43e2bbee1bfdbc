//! bcalib: bcrypt hashing with a work factor calibrated to wall-clock time
//!
//! Pipeline: secret acquisition → difficulty calibration → base64 output

pub mod core;
pub mod types;

// =============================================================================
// COST BOUNDS - bcrypt
// =============================================================================

/// Lowest cost bcrypt accepts (2^4 rounds)
pub const MIN_COST: u32 = 4;

/// Highest cost bcrypt accepts (2^31 rounds)
pub const MAX_COST: u32 = 31;

// =============================================================================
// DEFAULTS
// =============================================================================

/// Default minimum computation time for calibration
pub const DEFAULT_TARGET: &str = "500ms";

/// Consecutive terminal read failures tolerated before giving up
pub const MAX_READ_FAILURES: u32 = 3;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
