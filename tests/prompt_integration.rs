//! Integration tests for secret acquisition
//!
//! Tests scripted double entry → Calibrator

use bcalib::core::prompt::{MSG_MISMATCH, MSG_NO_PASSWORD};
use bcalib::core::{calibrate, SecretPrompt, SecretSource};
use bcalib::types::HashConfig;
use pretty_assertions::assert_eq;
use std::io;

/// Feeds fixed lines, counts reads
struct Lines {
    lines: Vec<&'static str>,
    reads: usize,
}

impl Lines {
    fn new(lines: &[&'static str]) -> Self {
        Self { lines: lines.to_vec(), reads: 0 }
    }
}

impl SecretSource for Lines {
    fn read_secret(&mut self, _prompt: &str) -> io::Result<String> {
        let line = self.lines.get(self.reads).copied().unwrap_or("");
        self.reads += 1;
        Ok(line.to_string())
    }
}

/// Empty entry: no secret, no error
#[test]
fn test_empty_entry_ends_quietly() {
    let mut out = Vec::new();
    let secret = SecretPrompt::new(Lines::new(&["", ""]), &mut out).acquire().unwrap();

    assert!(secret.is_none());
    assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", MSG_NO_PASSWORD));
}

/// Mismatch: re-prompt, hash only after a match
#[test]
fn test_mismatch_then_match_hashes() {
    let mut out = Vec::new();
    let secret = SecretPrompt::new(Lines::new(&["first", "second", "third", "third"]), &mut out)
        .acquire()
        .unwrap()
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", MSG_MISMATCH));

    let result = calibrate(secret, &HashConfig::fixed(4)).unwrap();
    assert_eq!(result.cost, 4);
}
