//! Error taxonomy for calibration runs
//!
//! Every variant is fatal: nothing here is retried by the calibrator.

use thiserror::Error;

/// Errors that abort a run before any hash is printed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// Target duration could not be parsed (or was negative)
    #[error("can not parse duration '{input}': {reason}")]
    InvalidDuration { input: String, reason: String },

    /// Fixed cost outside the primitive's bounds
    #[error("invalid difficulty {cost}: must be between {min} and {max}")]
    InvalidCost { cost: u32, min: u32, max: u32 },

    /// Unexpected failure inside the hashing primitive
    #[error("error computing bcrypt (difficulty {cost}): {message}")]
    Primitive { cost: u32, message: String },

    /// Digest text could not be decoded
    #[error("can not decode hash: {0}")]
    Encoding(String),

    /// Terminal input kept failing
    #[error("can not read password: {0}")]
    SecretInput(String),
}

impl HashError {
    /// Stable code string (for logging and JSON output)
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidDuration { .. } => "E101_INVALID_DURATION",
            Self::InvalidCost { .. } => "E102_INVALID_COST",
            Self::Primitive { .. } => "E201_PRIMITIVE_FAILURE",
            Self::Encoding(_) => "E301_ENCODING",
            Self::SecretInput(_) => "E401_SECRET_INPUT",
        }
    }

    pub(crate) fn invalid_duration(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidDuration {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_input() {
        let err = HashError::invalid_duration("abc", "missing unit");
        assert_eq!(err.to_string(), "can not parse duration 'abc': missing unit");

        let err = HashError::InvalidCost { cost: 40, min: 4, max: 31 };
        assert!(err.to_string().contains("40"));
    }

    #[test]
    fn test_codes_are_distinct() {
        let codes = [
            HashError::invalid_duration("", "empty").code(),
            HashError::InvalidCost { cost: 0, min: 4, max: 31 }.code(),
            HashError::Primitive { cost: 4, message: String::new() }.code(),
            HashError::Encoding(String::new()).code(),
            HashError::SecretInput(String::new()).code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
