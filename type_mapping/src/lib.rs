//! Database platform descriptors for TypeHaus column types
//! This crate provides the dialect knowledge, value model and parameter binding
//! the column types delegate to

pub mod bind;
pub mod sql;
pub mod types;
pub mod validate;

pub use bind::{bind_param, bind_value, bind_values, BindError, BindParam, PgQuery};
pub use sql::{
    platform_from_config, ColumnSpec, MySqlPlatform, Platform, PostgresPlatform,
    DEFAULT_DATE_FORMAT, DEFAULT_DATE_TIME_FORMAT,
};
pub use types::{BindingType, DbValue};
pub use validate::numeric_value;
