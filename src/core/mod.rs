//! Core modules for bcalib

pub mod duration;
pub mod primitive;
pub mod calibrator;
pub mod prompt;
pub mod encoding;

pub use duration::{parse_duration, format_duration};
pub use primitive::{HashPrimitive, Bcrypt};
pub use calibrator::{Calibrator, Clock, SystemClock, calibrate};
pub use prompt::{SecretPrompt, SecretSource, TerminalSource, acquire_secret};
pub use encoding::{encode_digest, decode_digest, hash_line, diagnostic_line, verify, verify_encoded};
