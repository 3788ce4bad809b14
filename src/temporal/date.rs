use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use type_mapping::{BindingType, ColumnSpec, DbValue, Platform};

use super::{conversion_failed, format_utc, invalid_type, parse_utc, utc_naive};
use crate::column_type::{ColumnType, ColumnValue};
use crate::errors::TypeHausError;

/// Date column stored as the UTC calendar date
///
/// The time of day is dropped on write. Values read back sit at midnight UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UtcDateType;

impl UtcDateType {
    pub const NAME: &'static str = "utc_date";

    pub fn new() -> Self {
        Self
    }

    pub fn to_database_string<Tz: TimeZone>(
        &self,
        value: &DateTime<Tz>,
        platform: &dyn Platform,
    ) -> Result<String, TypeHausError> {
        format_utc(&value.naive_utc(), platform.date_format(), Self::NAME)
    }

    /// Parse a stored date as midnight UTC
    pub fn parse_database_string(
        &self,
        raw: &str,
        platform: &dyn Platform,
    ) -> Result<DateTime<Utc>, TypeHausError> {
        let format = format!("{} %H:%M:%S", platform.date_format());
        parse_utc(&format!("{} 00:00:00", raw), &format, Self::NAME)
            .map_err(|_| conversion_failed(raw, Self::NAME, platform.date_format()))
    }
}

impl ColumnType for UtcDateType {
    type Value = DateTime<FixedOffset>;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn sql_declaration(
        &self,
        column: &ColumnSpec,
        platform: &dyn Platform,
    ) -> Result<String, TypeHausError> {
        Ok(platform.date_declaration(column))
    }

    fn binding_type(&self) -> BindingType {
        BindingType::Date
    }

    fn convert_to_database_value(
        &self,
        value: Option<&dyn ColumnValue>,
        platform: &dyn Platform,
    ) -> Result<DbValue, TypeHausError> {
        let Some(value) = value else {
            return Ok(DbValue::Null);
        };

        let utc = utc_naive(value).ok_or_else(|| invalid_type(Self::NAME))?;
        format_utc(&utc, platform.date_format(), Self::NAME).map(DbValue::Text)
    }

    fn convert_to_rust_value(
        &self,
        value: DbValue,
        platform: &dyn Platform,
    ) -> Result<Option<DateTime<FixedOffset>>, TypeHausError> {
        match value {
            DbValue::Null => Ok(None),
            DbValue::Timestamp(ts) => Ok(Some(ts)),
            DbValue::Text(raw) => self
                .parse_database_string(&raw, platform)
                .map(|utc| Some(utc.fixed_offset())),
            other => Err(conversion_failed(other, Self::NAME, platform.date_format())),
        }
    }

    fn requires_sql_comment_hint(&self, _platform: &dyn Platform) -> bool {
        true
    }
}
