//! UTC temporal column types
//!
//! Date and date-time values are always stored as UTC wall-clock strings.
//! Conversion works on a UTC copy of the value, so the caller's value and its
//! offset are never touched. Values read back carry the UTC offset.

mod date;
mod datetime;

pub use date::UtcDateType;
pub use datetime::UtcDateTimeType;

use std::fmt::{Display, Write};

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::column_type::ColumnValue;
use crate::errors::TypeHausError;
use crate::trace_log;

/// Types the write path accepts, as reported in conversion errors
const ACCEPTED_TYPES: &[&str] = &["null", "DateTime"];

/// UTC instant of a supported application value
///
/// Naive values carry no zone and are taken to already be in UTC. A bare date
/// is midnight of that day.
fn utc_naive(value: &dyn ColumnValue) -> Option<NaiveDateTime> {
    let value = value.as_any();
    if let Some(v) = value.downcast_ref::<DateTime<FixedOffset>>() {
        Some(v.naive_utc())
    } else if let Some(v) = value.downcast_ref::<DateTime<Utc>>() {
        Some(v.naive_utc())
    } else if let Some(v) = value.downcast_ref::<DateTime<Local>>() {
        Some(v.naive_utc())
    } else if let Some(v) = value.downcast_ref::<NaiveDate>() {
        v.and_hms_opt(0, 0, 0)
    } else {
        value.downcast_ref::<NaiveDateTime>().copied()
    }
}

fn invalid_type(type_name: &str) -> TypeHausError {
    TypeHausError::InvalidType {
        actual: "unsupported value".to_string(),
        type_name: type_name.to_string(),
        expected: ACCEPTED_TYPES,
    }
}

fn conversion_failed(value: impl Display, type_name: &str, format: &str) -> TypeHausError {
    trace_log!(type_name, format, "temporal conversion failed");
    TypeHausError::ConversionFailed {
        value: value.to_string(),
        type_name: type_name.to_string(),
        format: format.to_string(),
    }
}

/// Render a UTC instant with a platform format
///
/// Format strings come from configuration, so an unknown specifier is an
/// error instead of a panic.
fn format_utc(utc: &NaiveDateTime, format: &str, type_name: &str) -> Result<String, TypeHausError> {
    let mut out = String::new();
    write!(out, "{}", utc.format(format)).map_err(|_| conversion_failed(utc, type_name, format))?;
    Ok(out)
}

fn parse_utc(raw: &str, format: &str, type_name: &str) -> Result<DateTime<Utc>, TypeHausError> {
    NaiveDateTime::parse_from_str(raw, format)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|_| conversion_failed(raw, type_name, format))
}
