//! Error types for the TypeHaus crate
//!
//! This module contains all error types that can be returned by TypeHaus column types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TypeHausError {
    #[error("Field type {0} not supported")]
    UnsupportedFieldType(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(
        "Could not convert value of type {actual} to type {type_name}. Expected one of the following types: {}",
        .expected.join(", ")
    )]
    InvalidType {
        actual: String,
        type_name: String,
        expected: &'static [&'static str],
    },

    #[error("Could not convert database value \"{value}\" to type {type_name}. Expected format: {format}")]
    ConversionFailed {
        value: String,
        type_name: String,
        format: String,
    },

    #[error("Binding error: {0}")]
    Bind(#[from] type_mapping::BindError),
}

impl TypeHausError {
    /// Wiring or configuration problem, surfaced before any row is touched
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            TypeHausError::UnsupportedFieldType(_) | TypeHausError::Config(_)
        )
    }

    /// A single value could not be converted
    pub fn is_conversion_error(&self) -> bool {
        matches!(
            self,
            TypeHausError::InvalidType { .. }
                | TypeHausError::ConversionFailed { .. }
                | TypeHausError::Bind(_)
        )
    }
}
