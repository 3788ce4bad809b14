//! Convenience re-exports for common TypeHaus usage
//!
//! ```rust
//! use typehaus::prelude::*;
//! ```

// Column types
pub use crate::bitmask::{BitMask, BitMaskType, FlagSet, RawBitMask, RawFlags, SizeClass};
pub use crate::column_type::{ColumnType, ColumnValue};
pub use crate::errors::TypeHausError;
pub use crate::temporal::{UtcDateTimeType, UtcDateType};

// Configuration
pub use config::{BitMaskConfig, PlatformConfig, PlatformKind, TypesConfig};

// Platform descriptors and database values
pub use type_mapping::{
    bind_param, bind_value, bind_values, platform_from_config, BindError, BindParam,
    BindingType, ColumnSpec, DbValue, MySqlPlatform, Platform, PostgresPlatform,
};
