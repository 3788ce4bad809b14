//! Parameter binding
//!
//! Binds converted database values to sqlx PostgreSQL queries
//! following the binding type reported by the column type.

use crate::sql::Platform;
use crate::types::{BindingType, DbValue};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use sqlx::postgres::{PgArguments, PgTypeInfo};
use sqlx::query::Query;
use sqlx::types::Decimal;
use sqlx::{Postgres, Type};
use thiserror::Error;

pub type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

#[derive(Debug, Error)]
pub enum BindError {
    #[error("Cannot bind {value} as {binding:?}: expected format {format}")]
    Format {
        value: String,
        binding: BindingType,
        format: String,
    },
    #[error("Cannot bind {kind} value as {binding:?}")]
    Mismatch {
        kind: &'static str,
        binding: BindingType,
    },
}

/// Typed statement parameter for a database value
#[derive(Debug, Clone, PartialEq)]
pub enum BindParam {
    Integer(Option<i64>),
    Numeric(Decimal),
    Text(Option<String>),
    Timestamp(Option<NaiveDateTime>),
    Date(Option<NaiveDate>),
    TimestampTz(DateTime<FixedOffset>),
}

impl BindParam {
    /// PostgreSQL type the parameter is sent as
    pub fn type_info(&self) -> PgTypeInfo {
        match self {
            BindParam::Integer(_) => <i64 as Type<Postgres>>::type_info(),
            BindParam::Numeric(_) => <Decimal as Type<Postgres>>::type_info(),
            BindParam::Text(_) => <String as Type<Postgres>>::type_info(),
            BindParam::Timestamp(_) => <NaiveDateTime as Type<Postgres>>::type_info(),
            BindParam::Date(_) => <NaiveDate as Type<Postgres>>::type_info(),
            BindParam::TimestampTz(_) => <DateTime<FixedOffset> as Type<Postgres>>::type_info(),
        }
    }
}

/// Typed parameter for `value` under `binding`
///
/// Temporal text is parsed back with the platform formats so the server
/// receives a timestamp or date rather than text.
pub fn bind_param(
    value: &DbValue,
    binding: BindingType,
    platform: &dyn Platform,
) -> Result<BindParam, BindError> {
    let param = match (binding, value) {
        (BindingType::Integer, DbValue::Null) => BindParam::Integer(None),
        (BindingType::String, DbValue::Null) => BindParam::Text(None),
        (BindingType::DateTime, DbValue::Null) => BindParam::Timestamp(None),
        (BindingType::Date, DbValue::Null) => BindParam::Date(None),

        (BindingType::Integer, DbValue::Integer(i)) => BindParam::Integer(Some(*i)),
        (BindingType::Integer, DbValue::Unsigned(u)) => BindParam::Numeric(Decimal::from(*u)),
        (BindingType::Integer, DbValue::Float(f)) => BindParam::Integer(Some(*f as i64)),
        (BindingType::Integer | BindingType::String, DbValue::Text(s)) => {
            BindParam::Text(Some(s.clone()))
        }
        (BindingType::String, DbValue::Integer(_) | DbValue::Unsigned(_) | DbValue::Float(_)) => {
            BindParam::Text(Some(value.to_string()))
        }

        (BindingType::DateTime, DbValue::Text(s)) => {
            let format = platform.date_time_format();
            NaiveDateTime::parse_from_str(s, format)
                .map(|naive| BindParam::Timestamp(Some(naive)))
                .map_err(|_| format_error(s, binding, format))?
        }
        (BindingType::Date, DbValue::Text(s)) => {
            let format = platform.date_format();
            NaiveDate::parse_from_str(s, format)
                .map(|date| BindParam::Date(Some(date)))
                .map_err(|_| format_error(s, binding, format))?
        }

        (BindingType::DateTime, DbValue::Timestamp(ts)) => BindParam::Timestamp(Some(ts.naive_utc())),
        (BindingType::Date, DbValue::Timestamp(ts)) => BindParam::Date(Some(ts.naive_utc().date())),
        (BindingType::Integer | BindingType::String, DbValue::Timestamp(ts)) => {
            BindParam::TimestampTz(*ts)
        }

        (BindingType::DateTime | BindingType::Date, other) => {
            return Err(BindError::Mismatch {
                kind: other.kind(),
                binding,
            });
        }
    };

    Ok(param)
}

fn format_error(value: &str, binding: BindingType, format: &str) -> BindError {
    BindError::Format {
        value: value.to_string(),
        binding,
        format: format.to_string(),
    }
}

/// Bind one value as the next positional parameter
pub fn bind_value<'q>(
    query: PgQuery<'q>,
    value: &DbValue,
    binding: BindingType,
    platform: &dyn Platform,
) -> Result<PgQuery<'q>, BindError> {
    Ok(match bind_param(value, binding, platform)? {
        BindParam::Integer(v) => query.bind(v),
        BindParam::Numeric(v) => query.bind(v),
        BindParam::Text(v) => query.bind(v),
        BindParam::Timestamp(v) => query.bind(v),
        BindParam::Date(v) => query.bind(v),
        BindParam::TimestampTz(v) => query.bind(v),
    })
}

/// Bind a sequence of values in order
pub fn bind_values<'q, 'v, I>(
    query: PgQuery<'q>,
    values: I,
    platform: &dyn Platform,
) -> Result<PgQuery<'q>, BindError>
where
    I: IntoIterator<Item = (&'v DbValue, BindingType)>,
{
    values
        .into_iter()
        .try_fold(query, |query, (value, binding)| {
            bind_value(query, value, binding, platform)
        })
}
