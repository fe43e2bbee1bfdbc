//! Duration strings: `500ms`, `1.5s`, `1h2m3s`
//!
//! Grammar: optional sign, then one or more `<decimal><unit>` groups.
//! Units: ns, us (µs, μs), ms, s, m, h. The bare literal `0` needs no unit.
//! Negative values are rejected: a calibration target can not be below zero.

use lazy_static::lazy_static;
use regex::Regex;
use std::time::Duration;
use crate::types::HashError;

lazy_static! {
    // One `<integer>[.<fraction>]<unit>` group at the start of the input
    static ref RE_GROUP: Regex = Regex::new(
        r"^([0-9]*)(?:\.([0-9]*))?([^0-9.]*)"
    ).unwrap();
}

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Largest representable value, same bound as a signed 64-bit nanosecond count
const MAX_NANOS: u128 = i64::MAX as u128;

/// Fraction digits beyond this are below nanosecond resolution for every unit
const MAX_FRACTION_DIGITS: usize = 18;

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(60 * NANOS_PER_SEC),
        "h" => Some(3600 * NANOS_PER_SEC),
        _ => None,
    }
}

/// Parse a duration string into a non-negative `Duration`
pub fn parse_duration(input: &str) -> Result<Duration, HashError> {
    let mut rest = input;
    let mut negative = false;

    if let Some(stripped) = rest.strip_prefix('-') {
        negative = true;
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    }

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(HashError::invalid_duration(input, "empty duration"));
    }

    let mut total: u128 = 0;

    while !rest.is_empty() {
        let caps = RE_GROUP
            .captures(rest)
            .ok_or_else(|| HashError::invalid_duration(input, "malformed duration"))?;

        let whole = caps.get(1).map_or("", |m| m.as_str());
        let fraction = caps.get(2).map(|m| m.as_str());
        let unit = caps.get(3).map_or("", |m| m.as_str());
        let consumed = caps.get(0).map_or(0, |m| m.end());

        if whole.is_empty() && fraction.map_or(true, str::is_empty) {
            return Err(HashError::invalid_duration(input, "expected a number"));
        }
        if unit.is_empty() {
            return Err(HashError::invalid_duration(input, "missing unit"));
        }
        let scale = unit_nanos(unit)
            .ok_or_else(|| HashError::invalid_duration(input, format!("unknown unit '{}'", unit)))?;

        let overflow = || HashError::invalid_duration(input, "duration out of range");

        let whole_value: u128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };
        let mut group = whole_value.checked_mul(scale).ok_or_else(overflow)?;

        if let Some(digits) = fraction.filter(|f| !f.is_empty()) {
            let digits = &digits[..digits.len().min(MAX_FRACTION_DIGITS)];
            let numerator: u128 = digits.parse().map_err(|_| overflow())?;
            let denominator = 10u128.pow(digits.len() as u32);
            group += numerator * scale / denominator;
        }

        total = total.checked_add(group).ok_or_else(overflow)?;
        if total > MAX_NANOS {
            return Err(overflow());
        }

        rest = &rest[consumed..];
    }

    if negative && total > 0 {
        return Err(HashError::invalid_duration(input, "duration must not be negative"));
    }

    // total <= i64::MAX, so it fits in u64
    Ok(Duration::from_nanos(total as u64))
}

/// Render a duration for diagnostics (`523.4ms`, `1.25s`, `2m3s`)
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();

    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < NANOS_PER_MICRO {
        return format!("{}ns", nanos);
    }
    if nanos < NANOS_PER_MILLI {
        return format!("{}µs", decimal(nanos, NANOS_PER_MICRO, 3));
    }
    if nanos < NANOS_PER_SEC {
        return format!("{}ms", decimal(nanos, NANOS_PER_MILLI, 6));
    }

    let total_secs = nanos / NANOS_PER_SEC;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let sec_nanos = nanos % (60 * NANOS_PER_SEC);

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{}h", hours));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{}m", minutes));
    }
    out.push_str(&format!("{}s", decimal(sec_nanos, NANOS_PER_SEC, 9)));
    out
}

/// `value / unit` with the remainder as trimmed decimal digits
fn decimal(value: u128, unit: u128, width: usize) -> String {
    let whole = value / unit;
    let rem = value % unit;
    if rem == 0 {
        return whole.to_string();
    }
    let digits = format!("{:0width$}", rem, width = width);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}

// =============================================================================
// TESTS
// =============================================================================
