//! Bit mask column type
//!
//! Stores a flag set in the narrowest unsigned integer column the field asks
//! for. The write path never fails: any flag set stores its raw bits, and
//! anything else is stored as "no flags".

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use config::BitMaskConfig;
use type_mapping::{numeric_value, BindingType, ColumnSpec, DbValue, Platform};

use crate::bitmask::{BitMask, FlagSet};
use crate::column_type::{ColumnType, ColumnValue};
use crate::errors::TypeHausError;
use crate::{debug_log, trace_log};

/// Integer column widths a bit mask can be stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeClass {
    /// Up to 65 535
    #[default]
    SmallInt,
    /// Up to 4 294 967 295
    Int,
    /// Up to 2^64 - 1
    BigInt,
}

impl SizeClass {
    pub const SMALLINT: &'static str = "SMALLINT";
    pub const INT: &'static str = "INT";
    pub const BIGINT: &'static str = "BIGINT";

    /// Hint keyword selecting this size
    pub fn keyword(&self) -> &'static str {
        match self {
            SizeClass::SmallInt => Self::SMALLINT,
            SizeClass::Int => Self::INT,
            SizeClass::BigInt => Self::BIGINT,
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

impl FromStr for SizeClass {
    type Err = TypeHausError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::SMALLINT => Ok(SizeClass::SmallInt),
            Self::INT => Ok(SizeClass::Int),
            Self::BIGINT => Ok(SizeClass::BigInt),
            other => Err(TypeHausError::UnsupportedFieldType(other.to_string())),
        }
    }
}

/// Column type persisting flag sets over the table `M`
///
/// The `M: FlagSet` bound is the wiring check: a column type for a value that
/// is not a flag set cannot be constructed.
pub struct BitMaskType<M> {
    name: String,
    default_size: SizeClass,
    _marker: PhantomData<fn() -> M>,
}

impl<M> fmt::Debug for BitMaskType<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitMaskType")
            .field("name", &self.name)
            .field("value_type", &std::any::type_name::<M>())
            .field("default_size", &self.default_size)
            .finish()
    }
}

impl<M> Clone for BitMaskType<M> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            default_size: self.default_size,
            _marker: PhantomData,
        }
    }
}

impl<M: FlagSet> BitMaskType<M> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_size: SizeClass::default(),
            _marker: PhantomData,
        }
    }

    /// Size used for columns without a `field_type` hint
    pub fn with_default_size(mut self, size: SizeClass) -> Self {
        self.default_size = size;
        self
    }

    /// Build from configuration, rejecting unknown size keywords up front
    pub fn from_config(name: impl Into<String>, config: &BitMaskConfig) -> Result<Self, TypeHausError> {
        let column_type = Self::new(name);
        match config.default_size.as_deref() {
            Some(size) => Ok(column_type.with_default_size(size.parse()?)),
            None => Ok(column_type),
        }
    }

    pub fn default_size(&self) -> SizeClass {
        self.default_size
    }

    /// Size selected by the column's hint, or the default
    pub fn size_class(&self, column: &ColumnSpec) -> Result<SizeClass, TypeHausError> {
        match column.field_type.as_deref() {
            Some(hint) => hint.parse(),
            None => Ok(self.default_size),
        }
    }

    /// Database form of a typed mask; null stores as no flags
    pub fn encode(&self, value: Option<&BitMask<M>>) -> DbValue {
        let bits = value.map(BitMask::bits).unwrap_or(BitMask::<M>::NONE);
        DbValue::from(bits)
    }

    /// Mask read from a raw value; null and non-numeric values give an empty mask
    ///
    /// Only the low 64 bits are kept, so signed storage of the top bit reads
    /// back as the same mask.
    pub fn decode(&self, value: &DbValue) -> BitMask<M> {
        match numeric_value(value) {
            Some(number) => BitMask::new(number as u64),
            None => {
                trace_log!(
                    type_name = %self.name,
                    kind = value.kind(),
                    "non-numeric bit mask value read as empty"
                );
                BitMask::default()
            }
        }
    }
}

impl<M: FlagSet> ColumnType for BitMaskType<M> {
    type Value = BitMask<M>;

    fn name(&self) -> &str {
        &self.name
    }

    fn sql_declaration(
        &self,
        column: &ColumnSpec,
        platform: &dyn Platform,
    ) -> Result<String, TypeHausError> {
        let size = self.size_class(column)?;
        debug_log!(
            column = %column.name,
            size = size.keyword(),
            platform = platform.name(),
            "declaring bit mask column"
        );

        // Absent masks are stored as 0, so the column never needs NULL
        let column = ColumnSpec {
            unsigned: true,
            notnull: true,
            ..column.clone()
        };

        Ok(match size {
            SizeClass::SmallInt => platform.small_int_declaration(&column),
            SizeClass::Int => platform.integer_declaration(&column),
            SizeClass::BigInt => platform.big_int_declaration(&column),
        })
    }

    fn binding_type(&self) -> BindingType {
        BindingType::Integer
    }

    fn convert_to_database_value(
        &self,
        value: Option<&dyn ColumnValue>,
        _platform: &dyn Platform,
    ) -> Result<DbValue, TypeHausError> {
        match value.and_then(|v| v.flag_bits()) {
            Some(bits) => Ok(DbValue::from(bits)),
            None => {
                trace_log!(
                    type_name = %self.name,
                    is_null = value.is_none(),
                    "non bit mask value stored as empty"
                );
                Ok(self.encode(None))
            }
        }
    }

    fn convert_to_rust_value(
        &self,
        value: DbValue,
        _platform: &dyn Platform,
    ) -> Result<Option<BitMask<M>>, TypeHausError> {
        Ok(Some(self.decode(&value)))
    }

    fn requires_sql_comment_hint(&self, _platform: &dyn Platform) -> bool {
        true
    }
}
