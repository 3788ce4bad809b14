use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use type_mapping::{BindingType, ColumnSpec, DbValue, Platform};

use super::{conversion_failed, format_utc, invalid_type, parse_utc, utc_naive};
use crate::column_type::{ColumnType, ColumnValue};
use crate::errors::TypeHausError;

/// Date-time column stored as a UTC `"date time"` string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UtcDateTimeType;

impl UtcDateTimeType {
    pub const NAME: &'static str = "utc_datetime";

    pub fn new() -> Self {
        Self
    }

    /// Database string for a typed value; `value` itself is not modified
    pub fn to_database_string<Tz: TimeZone>(
        &self,
        value: &DateTime<Tz>,
        platform: &dyn Platform,
    ) -> Result<String, TypeHausError> {
        format_utc(&value.naive_utc(), platform.date_time_format(), Self::NAME)
    }

    /// Parse a stored string as a UTC date-time
    pub fn parse_database_string(
        &self,
        raw: &str,
        platform: &dyn Platform,
    ) -> Result<DateTime<Utc>, TypeHausError> {
        parse_utc(raw, platform.date_time_format(), Self::NAME)
    }
}

impl ColumnType for UtcDateTimeType {
    type Value = DateTime<FixedOffset>;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn sql_declaration(
        &self,
        column: &ColumnSpec,
        platform: &dyn Platform,
    ) -> Result<String, TypeHausError> {
        Ok(platform.date_time_declaration(column))
    }

    fn binding_type(&self) -> BindingType {
        BindingType::DateTime
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
        format_utc(&utc, platform.date_time_format(), Self::NAME).map(DbValue::Text)
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
            other => Err(conversion_failed(
                other,
                Self::NAME,
                platform.date_time_format(),
            )),
        }
    }

    fn requires_sql_comment_hint(&self, _platform: &dyn Platform) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};
    use type_mapping::{MySqlPlatform, PostgresPlatform};

    #[test]
    fn test_naive_value_is_relabelled() {
        let naive = NaiveDate::from_ymd_opt(2025, 10, 12)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap();

        let stored = UtcDateTimeType
            .convert_to_database_value(Some(&naive), &MySqlPlatform::new())
            .unwrap();
        assert_eq!(stored, DbValue::Text("2025-10-12 15:00:00".to_string()));
    }

    #[test]
    fn test_custom_platform_format() {
        let platform = PostgresPlatform::with_formats(None, Some("%d.%m.%Y %H:%M".to_string()));
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let value = offset.with_ymd_and_hms(2025, 10, 12, 7, 30, 0).unwrap();

        let stored = UtcDateTimeType.to_database_string(&value, &platform).unwrap();
        assert_eq!(stored, "12.10.2025 12:30");

        let parsed = UtcDateTimeType.parse_database_string(&stored, &platform).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn test_unrenderable_format_is_an_error() {
        let platform = MySqlPlatform::with_formats(None, Some("%Y-%m-%".to_string()));
        let value = Utc.with_ymd_and_hms(2025, 10, 12, 12, 0, 0).unwrap();

        let err = UtcDateTimeType.to_database_string(&value, &platform).unwrap_err();
        assert!(err.is_conversion_error());
    }

    #[test]
    fn test_non_text_raw_value_fails() {
        let err = UtcDateTimeType
            .convert_to_rust_value(DbValue::Integer(26), &MySqlPlatform::new())
            .unwrap_err();

        match err {
            TypeHausError::ConversionFailed { value, type_name, .. } => {
                assert_eq!(value, "26");
                assert_eq!(type_name, "utc_datetime");
            }
            other => panic!("Expected ConversionFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_parsed_value_fields() {
        let value = UtcDateTimeType
            .convert_to_rust_value(
                DbValue::Text("2025-10-12 12:34:56".to_string()),
                &PostgresPlatform::new(),
            )
            .unwrap()
            .unwrap();

        assert_eq!(value.offset().local_minus_utc(), 0);
        assert_eq!((value.hour(), value.minute(), value.second()), (12, 34, 56));
    }

    #[test]
    fn test_metadata() {
        let platform = MySqlPlatform::new();
        assert_eq!(UtcDateTimeType.name(), "utc_datetime");
        assert_eq!(UtcDateTimeType.binding_type(), BindingType::DateTime);
        assert!(UtcDateTimeType.requires_sql_comment_hint(&platform));
        assert_eq!(
            UtcDateTimeType.sql_comment_hint(&platform).as_deref(),
            Some("(Type:utc_datetime)")
        );
        assert_eq!(
            UtcDateTimeType
                .sql_declaration(&ColumnSpec::new("created_at"), &platform)
                .unwrap(),
            "DATETIME"
        );
    }
}
