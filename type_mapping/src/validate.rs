//! Validation utilities for database values
//!
//! This module decides whether a raw database value is numeric
//! and extracts its integer part.

use crate::types::DbValue;

/// Integer part of a numeric database value, `None` when not numeric
///
/// The result spans both the signed and unsigned 64-bit ranges. Numeric
/// strings may carry surrounding whitespace, a sign, a fraction or an
/// exponent. Fractions are truncated toward zero.
pub fn numeric_value(value: &DbValue) -> Option<i128> {
    match value {
        DbValue::Integer(i) => Some(i128::from(*i)),
        DbValue::Unsigned(u) => Some(i128::from(*u)),
        DbValue::Float(f) if f.is_finite() => Some(*f as i128),
        DbValue::Text(s) => parse_numeric_str(s),
        _ => None,
    }
}

fn parse_numeric_str(raw: &str) -> Option<i128> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(i) = trimmed.parse::<i128>() {
        return Some(i);
    }

    // f64 parsing also accepts "inf" and "NaN"
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => Some(f as i128),
        _ => None,
    }
}
