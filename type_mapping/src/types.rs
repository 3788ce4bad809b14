//! Database value definitions
//!
//! This module provides the dynamic value exchanged with the database
//! and the parameter binding tags column types report.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Database-side value handed to and produced by column types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DbValue {
    Null,
    Integer(i64),
    /// Unsigned integer above `i64::MAX`
    Unsigned(u64),
    Float(f64),
    Text(String),
    /// Temporal value already decoded by the driver
    Timestamp(DateTime<FixedOffset>),
}

impl DbValue {
    /// Name of the variant, used in conversion error messages
    pub fn kind(&self) -> &'static str {
        match self {
            DbValue::Null => "null",
            DbValue::Integer(_) => "integer",
            DbValue::Unsigned(_) => "unsigned",
            DbValue::Float(_) => "float",
            DbValue::Text(_) => "string",
            DbValue::Timestamp(_) => "timestamp",
        }
    }
}

impl fmt::Display for DbValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DbValue::Null => write!(f, "NULL"),
            DbValue::Integer(i) => write!(f, "{}", i),
            DbValue::Unsigned(u) => write!(f, "{}", u),
            DbValue::Float(v) => write!(f, "{}", v),
            DbValue::Text(s) => write!(f, "{}", s),
            DbValue::Timestamp(ts) => write!(f, "{}", ts.to_rfc3339()),
        }
    }
}

/// How a column type wants its values bound to prepared statements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BindingType {
    Integer,
    String,
    /// Text in the platform date-time format, bound as a timestamp
    DateTime,
    /// Text in the platform date format, bound as a date
    Date,
}

impl From<String> for DbValue {
    fn from(val: String) -> Self {
        DbValue::Text(val)
    }
}

impl From<&str> for DbValue {
    fn from(val: &str) -> Self {
        DbValue::Text(val.to_string())
    }
}

impl From<i16> for DbValue {
    fn from(val: i16) -> Self {
        DbValue::Integer(val as i64)
    }
}

impl From<i32> for DbValue {
    fn from(val: i32) -> Self {
        DbValue::Integer(val as i64)
    }
}

impl From<i64> for DbValue {
    fn from(val: i64) -> Self {
        DbValue::Integer(val)
    }
}

impl From<u64> for DbValue {
    fn from(val: u64) -> Self {
        i64::try_from(val)
            .map(DbValue::Integer)
            .unwrap_or(DbValue::Unsigned(val))
    }
}

impl From<f64> for DbValue {
    fn from(val: f64) -> Self {
        DbValue::Float(val)
    }
}

impl From<DateTime<FixedOffset>> for DbValue {
    fn from(val: DateTime<FixedOffset>) -> Self {
        DbValue::Timestamp(val)
    }
}

impl From<DateTime<Utc>> for DbValue {
    fn from(val: DateTime<Utc>) -> Self {
        DbValue::Timestamp(val.fixed_offset())
    }
}

impl<T> From<Option<T>> for DbValue
where
    T: Into<DbValue>,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => DbValue::Null,
        }
    }
}
