//! Duration conversion functions
//!
//! Durations are written as an optional sign followed by one or more
//! `<number><unit>` pairs, e.g. `300ms`, `-1.5h` or `2h45m`. Numbers may have a
//! fractional part. A bare `0` needs no unit.

use std::time::Duration;

use crate::error::ConversionError;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

const UNITS: &[(&str, u64)] = &[
    ("ns", NANOSECOND),
    ("us", MICROSECOND),
    ("µs", MICROSECOND), // U+00B5 micro sign
    ("μs", MICROSECOND), // U+03BC greek mu
    ("ms", MILLISECOND),
    ("s", SECOND),
    ("m", MINUTE),
    ("h", HOUR),
];

// Magnitude of i64::MIN; the largest accumulated value we ever allow.
const LIMIT: u64 = 1 << 63;

/// Parse a duration literal into signed nanoseconds.
pub fn parse_duration_nanos(value: &str) -> Result<i64, ConversionError> {
    let invalid = || ConversionError::InvalidDuration(value.to_string());

    let (negative, mut rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    if rest == "0" {
        return Ok(0);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        if !rest.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
            return Err(invalid());
        }

        let (whole_digits, tail) = split_digits(rest);
        let whole = if whole_digits.is_empty() {
            0
        } else {
            whole_digits.parse::<u64>().map_err(|_| invalid())?
        };
        rest = tail;

        let mut fraction: u64 = 0;
        let mut scale: f64 = 1.0;
        let mut fraction_digits = "";
        if let Some(after_dot) = rest.strip_prefix('.') {
            let (digits, tail) = split_digits(after_dot);
            (fraction, scale) = leading_fraction(digits);
            fraction_digits = digits;
            rest = tail;
        }
        if whole_digits.is_empty() && fraction_digits.is_empty() {
            return Err(invalid());
        }

        let unit_end = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (unit, tail) = rest.split_at(unit_end);
        rest = tail;
        if unit.is_empty() {
            return Err(ConversionError::MissingDurationUnit(value.to_string()));
        }
        let multiplier = UNITS
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, multiplier)| *multiplier)
            .ok_or_else(|| ConversionError::UnknownDurationUnit {
                unit: unit.to_string(),
                value: value.to_string(),
            })?;

        if whole > LIMIT / multiplier {
            return Err(invalid());
        }
        let mut part = whole * multiplier;
        if fraction > 0 {
            part += (fraction as f64 * (multiplier as f64 / scale)) as u64;
            if part > LIMIT {
                return Err(invalid());
            }
        }
        total = total
            .checked_add(part)
            .filter(|total| *total <= LIMIT)
            .ok_or_else(invalid)?;
    }

    if negative {
        return Ok((total as i64).wrapping_neg());
    }
    i64::try_from(total).map_err(|_| invalid())
}

/// Convert string to `std::time::Duration`. Negative spans are rejected.
pub fn string_to_duration(value: &str) -> Result<Duration, ConversionError> {
    let nanos = parse_duration_nanos(value)?;
    let nanos =
        u64::try_from(nanos).map_err(|_| ConversionError::NegativeDuration(value.to_string()))?;
    Ok(Duration::from_nanos(nanos))
}

/// Convert string to a signed `chrono::Duration`
pub fn string_to_time_delta(value: &str) -> Result<chrono::Duration, ConversionError> {
    parse_duration_nanos(value).map(chrono::Duration::nanoseconds)
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

// Digits past the point where the fraction would overflow are dropped; they
// are below nanosecond precision anyway.
fn leading_fraction(digits: &str) -> (u64, f64) {
    let mut fraction: u64 = 0;
    let mut scale: f64 = 1.0;
    for digit in digits.bytes() {
        if fraction > (LIMIT - 1) / 10 {
            break;
        }
        let next = fraction * 10 + u64::from(digit - b'0');
        if next > LIMIT {
            break;
        }
        fraction = next;
        scale *= 10.0;
    }
    (fraction, scale)
}
