//! Difficulty Calibrator: pick the cheapest cost slower than a target
//!
//! Costs are tried in ascending order, one at a time. Each attempt really
//! hashes the secret and is timed; the first cost whose elapsed time is
//! strictly greater than the target wins. If none does, the maximum cost is
//! used and the result is flagged as not meeting the target.

use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use crate::core::duration::{format_duration, parse_duration};
use crate::core::primitive::{Bcrypt, HashPrimitive};
use crate::types::{CalibrationResult, Difficulty, HashConfig, HashError, Secret};

/// Source of hash timings
pub trait Clock {
    /// Run `f` and report how long it took
    fn measure<T>(&self, f: impl FnOnce() -> T) -> (T, Duration);
}

/// Wall clock (`Instant`)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn measure<T>(&self, f: impl FnOnce() -> T) -> (T, Duration) {
        let start = Instant::now();
        let out = f();
        (out, start.elapsed())
    }
}

/// Calibrator over a hashing primitive
#[derive(Debug, Default)]
pub struct Calibrator<P = Bcrypt, C = SystemClock> {
    primitive: P,
    clock: C,
}

impl Calibrator<Bcrypt, SystemClock> {
    /// Calibrator backed by bcrypt
    pub fn new() -> Self {
        Self {
            primitive: Bcrypt,
            clock: SystemClock,
        }
    }
}

impl<P: HashPrimitive> Calibrator<P, SystemClock> {
    /// Calibrator over any primitive, timed by the wall clock
    pub fn with_primitive(primitive: P) -> Self {
        Self {
            primitive,
            clock: SystemClock,
        }
    }
}

impl<P: HashPrimitive, C: Clock> Calibrator<P, C> {
    /// Replace the timing source
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Calibrator<P, C2> {
        Calibrator {
            primitive: self.primitive,
            clock,
        }
    }

    /// Access the underlying primitive
    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    /// Turn raw configuration into a difficulty.
    ///
    /// A non-zero fixed cost wins and the target string is not even parsed.
    /// Both checks happen before any hashing.
    pub fn resolve(&self, config: &HashConfig) -> Result<Difficulty, HashError> {
        if config.difficulty != 0 {
            self.primitive.check_cost(config.difficulty)?;
            return Ok(Difficulty::Fixed(config.difficulty));
        }
        Ok(Difficulty::Target(parse_duration(&config.target)?))
    }

    /// Resolve `config` and hash `secret` at the selected cost.
    ///
    /// The secret is consumed and dropped (wiped) before this returns.
    pub fn calibrate(&self, secret: Secret, config: &HashConfig) -> Result<CalibrationResult, HashError> {
        let difficulty = self.resolve(config)?;
        self.run(secret, difficulty)
    }

    /// Hash `secret` for an already resolved difficulty
    pub fn run(&self, secret: Secret, difficulty: Difficulty) -> Result<CalibrationResult, HashError> {
        match difficulty {
            Difficulty::Fixed(cost) => self.hash_fixed(&secret, cost),
            Difficulty::Target(target) => self.search(&secret, target),
        }
    }

    /// Fixed-cost path: one call, no timing
    fn hash_fixed(&self, secret: &Secret, cost: u32) -> Result<CalibrationResult, HashError> {
        self.primitive.check_cost(cost)?;
        let digest = self.primitive.hash(secret.expose(), cost)?;
        info!(cost, "hashed at fixed difficulty");
        Ok(CalibrationResult::fixed(cost, digest))
    }

    /// Adaptive path: ascending linear search
    fn search(&self, secret: &Secret, target: Duration) -> Result<CalibrationResult, HashError> {
        let range = self.primitive.cost_range();
        let max = *range.end();

        // Latest attempt only; earlier digests are dropped as soon as they are superseded
        let mut last: Option<(u32, Vec<u8>, Duration)> = None;
        let mut probes = 0u32;

        for cost in range {
            let (hashed, elapsed) = self.clock.measure(|| self.primitive.hash(secret.expose(), cost));
            let digest = hashed.map_err(|e| match e {
                HashError::Primitive { .. } => e,
                other => HashError::Primitive {
                    cost,
                    message: other.to_string(),
                },
            })?;
            probes += 1;

            debug!(cost, elapsed = %format_duration(elapsed), "timed cost");

            if elapsed > target {
                info!(
                    cost,
                    elapsed = %format_duration(elapsed),
                    target = %format_duration(target),
                    probes,
                    "difficulty found"
                );
                return Ok(CalibrationResult::measured(cost, digest, elapsed, target, true, probes));
            }

            last = Some((cost, digest, elapsed));
        }

        let (cost, digest, elapsed) = last.ok_or_else(|| HashError::Primitive {
            cost: max,
            message: "empty cost range".to_string(),
        })?;

        warn!(
            cost,
            target = %format_duration(target),
            "no difficulty reached the target, using the highest"
        );
        Ok(CalibrationResult::measured(cost, digest, elapsed, target, false, probes))
    }
}

/// Calibrate with bcrypt
pub fn calibrate(secret: Secret, config: &HashConfig) -> Result<CalibrationResult, HashError> {
    Calibrator::new().calibrate(secret, config)
}

// =============================================================================
// TESTS
// =============================================================================
