//! # TypeHaus
//!
//! Custom SQL column types for mapping layers: bit mask flag sets stored in
//! unsigned integer columns, and date/date-time values normalized to UTC.
//!
//! ## Quick Start
//!
//! ```rust
//! use typehaus::prelude::*;
//! use bitflags::bitflags;
//! use chrono::{FixedOffset, TimeZone};
//!
//! bitflags! {
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//!     pub struct UserFlags: u64 {
//!         const VERIFIED = 1 << 0;
//!         const BANNED = 1 << 1;
//!     }
//! }
//!
//! let platform = MySqlPlatform::new();
//!
//! // Bit masks
//! let flags_type = BitMaskType::<UserFlags>::new("user_flags");
//! let column = ColumnSpec::new("flags").with_field_type("INT");
//! assert_eq!(
//!     flags_type.sql_declaration(&column, &platform)?,
//!     "INT UNSIGNED NOT NULL"
//! );
//!
//! let mut flags = BitMask::<UserFlags>::default();
//! flags.set(UserFlags::VERIFIED);
//! let stored = flags_type.convert_to_database_value(Some(&flags), &platform)?;
//! assert_eq!(stored, DbValue::Integer(1));
//!
//! // UTC date-times
//! let moscow = FixedOffset::east_opt(3 * 3600).unwrap();
//! let local = moscow.with_ymd_and_hms(2025, 10, 12, 15, 0, 0).unwrap();
//! let stored = UtcDateTimeType.convert_to_database_value(Some(&local), &platform)?;
//! assert_eq!(stored, DbValue::Text("2025-10-12 12:00:00".to_string()));
//! # Ok::<(), TypeHausError>(())
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        $crate::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod bitmask;
pub mod column_type;
pub mod errors;
pub mod prelude;
pub mod temporal;

// Re-export the main public types for convenience
pub use bitmask::{BitMask, BitMaskType, FlagSet, RawBitMask, RawFlags, SizeClass};
pub use column_type::{ColumnType, ColumnValue};
pub use errors::TypeHausError;
pub use temporal::{UtcDateTimeType, UtcDateType};

// Re-export centralized config
pub use config::{BitMaskConfig, ConfigError, PlatformConfig, PlatformKind, TypesConfig};

// Re-export internal crates used by the public API
pub use type_mapping;

// Flag tables are declared with `bitflags!`
pub use bitflags;

// Used by the logging macros
#[doc(hidden)]
pub use tracing;
