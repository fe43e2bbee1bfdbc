//! Integration tests for calibration
//!
//! Tests the full path: secret → Calibrator (bcrypt) → base64 output → verify

use bcalib::core::{
    calibrate, decode_digest, diagnostic_line, encode_digest, hash_line, verify, Bcrypt, Calibrator, HashPrimitive,
};
use bcalib::types::{HashConfig, HashError, Secret};
use bcalib::{MIN_COST, MAX_COST};
use pretty_assertions::assert_eq;

/// Zero target: one hash at the lowest cost
#[test]
fn test_zero_target_hashes_once() {
    let result = calibrate(Secret::from("correct horse"), &HashConfig::target("0ms")).unwrap();

    assert_eq!(result.cost, MIN_COST);
    assert_eq!(result.probes, 1);
    assert!(result.met_threshold);
    assert!(result.elapsed.is_some());
    assert!(hash_line(&result).starts_with("Hash: "));
    assert!(diagnostic_line(&result).unwrap().starts_with("Using difficulty 4 with time "));
}

/// Fixed cost 10: one call, digest embeds cost 10
#[test]
fn test_fixed_cost_ten() {
    let result = calibrate(Secret::from("x"), &HashConfig::fixed(10)).unwrap();

    assert_eq!(result.cost, 10);
    assert_eq!(result.probes, 1);
    assert_eq!(result.elapsed, None);
    assert_eq!(diagnostic_line(&result), None);

    let decoded = decode_digest(&encode_digest(&result.digest)).unwrap();
    assert!(decoded.starts_with(b"$2b$10$"));
    assert_eq!(Bcrypt.cost_of(&decoded), Some(10));
}

/// Same secret, same cost: different digests, both verify
#[test]
fn test_salted_digests_both_verify() {
    let config = HashConfig::fixed(MIN_COST);
    let a = calibrate(Secret::from("same"), &config).unwrap();
    let b = calibrate(Secret::from("same"), &config).unwrap();

    assert_ne!(a.digest, b.digest);
    assert!(verify(Secret::from("same"), &encode_digest(&a.digest)).unwrap().valid);
    assert!(verify(Secret::from("same"), &encode_digest(&b.digest)).unwrap().valid);
    assert!(!verify(Secret::from("other"), &encode_digest(&a.digest)).unwrap().valid);
}

/// Invalid inputs fail before hashing
#[test]
fn test_invalid_inputs() {
    let err = calibrate(Secret::from("pw"), &HashConfig::target("abc")).unwrap_err();
    assert!(matches!(err, HashError::InvalidDuration { .. }));

    let err = calibrate(Secret::from("pw"), &HashConfig::fixed(MAX_COST + 1)).unwrap_err();
    assert_eq!(err, HashError::InvalidCost { cost: MAX_COST + 1, min: MIN_COST, max: MAX_COST });

    let err = calibrate(Secret::from("pw"), &HashConfig::fixed(2)).unwrap_err();
    assert_eq!(err.code(), "E102_INVALID_COST");
}

/// A modest target lands on a cost whose hash actually took longer
#[test]
fn test_small_target_is_exceeded() {
    let calibrator = Calibrator::new();
    let result = calibrator.calibrate(Secret::from("pw"), &HashConfig::target("5ms")).unwrap();

    assert!(result.met_threshold);
    assert!(result.elapsed.unwrap() > std::time::Duration::from_millis(5));
    assert_eq!(result.probes, result.cost - MIN_COST + 1);
    assert!(Bcrypt.verify(b"pw", &result.digest).unwrap());
}

/// JSON output carries the same digest as the hash line
#[test]
fn test_json_output() {
    let result = calibrate(Secret::from("pw"), &HashConfig::fixed(4)).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["cost"], 4);
    assert_eq!(json["elapsed_ms"], serde_json::Value::Null);
    assert_eq!(
        format!("Hash: {}", json["digest"].as_str().unwrap()),
        hash_line(&result)
    );
}
