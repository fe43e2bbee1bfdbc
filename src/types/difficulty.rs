//! Difficulty selection inputs

use std::time::Duration;
use crate::DEFAULT_TARGET;

/// Raw run configuration as given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashConfig {
    /// Minimum computation time, as a duration string (`500ms`, `1.5s`)
    pub target: String,
    /// Fixed cost; 0 means "calibrate from `target`"
    pub difficulty: u32,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            difficulty: 0,
        }
    }
}

impl HashConfig {
    /// Calibrate against a target duration
    pub fn target(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            difficulty: 0,
        }
    }

    /// Use a fixed cost, skipping calibration
    pub fn fixed(difficulty: u32) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }
}

/// Resolved difficulty: either dictated or derived from timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Hash once at this cost, no timing
    Fixed(u32),
    /// Probe ascending costs until one takes longer than this
    Target(Duration),
}
