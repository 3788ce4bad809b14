//! Column type contract
//!
//! The mapping layer drives every custom column type through this trait:
//! it asks for the column DDL, the binding type, and converts values in both
//! directions.

use std::any::Any;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};
use type_mapping::{BindingType, ColumnSpec, DbValue, Platform};

use crate::errors::TypeHausError;

/// Application value handed to a column type's write path
///
/// Column types downcast through [`as_any`](ColumnValue::as_any) for concrete
/// types and ask [`flag_bits`](ColumnValue::flag_bits) for any flag set.
pub trait ColumnValue: Any {
    fn as_any(&self) -> &dyn Any;

    /// Raw bits when the value is a flag set
    fn flag_bits(&self) -> Option<u64> {
        None
    }
}

macro_rules! impl_column_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ColumnValue for $ty {
                fn as_any(&self) -> &dyn Any {
                    self
                }
            }
        )*
    };
}

impl_column_value!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    String,
    &'static str,
    NaiveDate,
    NaiveDateTime,
    DateTime<Utc>,
    DateTime<FixedOffset>,
    DateTime<Local>,
);

/// A custom SQL column type
pub trait ColumnType: Send + Sync {
    /// In-memory value produced when reading the column
    type Value;

    /// Registered name of the type
    fn name(&self) -> &str;

    /// DDL fragment declaring a column of this type
    fn sql_declaration(
        &self,
        column: &ColumnSpec,
        platform: &dyn Platform,
    ) -> Result<String, TypeHausError>;

    fn binding_type(&self) -> BindingType;

    /// Convert an application value (`None` for null) to its database form
    fn convert_to_database_value(
        &self,
        value: Option<&dyn ColumnValue>,
        platform: &dyn Platform,
    ) -> Result<DbValue, TypeHausError>;

    /// Convert a raw database value to the in-memory value (`None` for null)
    fn convert_to_rust_value(
        &self,
        value: DbValue,
        platform: &dyn Platform,
    ) -> Result<Option<Self::Value>, TypeHausError>;

    /// Whether generated DDL must tag the column so the type survives schema introspection
    fn requires_sql_comment_hint(&self, _platform: &dyn Platform) -> bool {
        false
    }

    fn sql_comment_hint(&self, platform: &dyn Platform) -> Option<String> {
        if self.requires_sql_comment_hint(platform) {
            Some(format!("(Type:{})", self.name()))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values_are_not_flag_sets() {
        let values: [&dyn ColumnValue; 4] = [&7i32, &u64::MAX, &"flags", &true];

        for value in values {
            assert_eq!(value.flag_bits(), None);
        }
    }

    #[test]
    fn test_downcast_through_as_any() {
        let value: &dyn ColumnValue = &String::from("abc");
        assert_eq!(value.as_any().downcast_ref::<String>().map(String::as_str), Some("abc"));
        assert!(value.as_any().downcast_ref::<i64>().is_none());
    }
}
