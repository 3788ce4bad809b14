//! SQL platform descriptors
//!
//! This module renders the column DDL fragments column types ask for
//! and exposes the date/date-time formats each platform stores.

use config::{PlatformConfig, PlatformKind};

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Column definition handed to a column type by the mapping layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: String,
    pub unsigned: bool,
    pub notnull: bool,
    /// Optional size hint for integer-backed columns (`SMALLINT`, `INT`, `BIGINT`)
    pub field_type: Option<String>,
    pub comment: Option<String>,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_field_type(mut self, field_type: impl Into<String>) -> Self {
        self.field_type = Some(field_type.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn unsigned(mut self, unsigned: bool) -> Self {
        self.unsigned = unsigned;
        self
    }

    pub fn notnull(mut self, notnull: bool) -> Self {
        self.notnull = notnull;
        self
    }
}

/// Dialect knowledge column types delegate to
pub trait Platform: Send + Sync {
    fn name(&self) -> &'static str;

    fn small_int_declaration(&self, column: &ColumnSpec) -> String;

    fn integer_declaration(&self, column: &ColumnSpec) -> String;

    fn big_int_declaration(&self, column: &ColumnSpec) -> String;

    fn date_time_declaration(&self, column: &ColumnSpec) -> String;

    fn date_declaration(&self, column: &ColumnSpec) -> String;

    /// chrono format used to store date-time values
    fn date_time_format(&self) -> &str;

    /// chrono format used to store date values
    fn date_format(&self) -> &str;
}

fn with_nullability(sql: &str, column: &ColumnSpec) -> String {
    if column.notnull {
        format!("{} NOT NULL", sql)
    } else {
        sql.to_string()
    }
}

/// PostgreSQL has no unsigned integers, so unsigned columns widen to the
/// next type able to hold the full unsigned range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgresPlatform {
    date_format: String,
    date_time_format: String,
}

impl PostgresPlatform {
    pub fn new() -> Self {
        Self::with_formats(None, None)
    }

    pub fn with_formats(date_format: Option<String>, date_time_format: Option<String>) -> Self {
        Self {
            date_format: date_format.unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string()),
            date_time_format: date_time_format
                .unwrap_or_else(|| DEFAULT_DATE_TIME_FORMAT.to_string()),
        }
    }
}

impl Default for PostgresPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for PostgresPlatform {
    fn name(&self) -> &'static str {
        "postgresql"
    }

    fn small_int_declaration(&self, column: &ColumnSpec) -> String {
        let sql = if column.unsigned { "INTEGER" } else { "SMALLINT" };
        with_nullability(sql, column)
    }

    fn integer_declaration(&self, column: &ColumnSpec) -> String {
        let sql = if column.unsigned { "BIGINT" } else { "INTEGER" };
        with_nullability(sql, column)
    }

    fn big_int_declaration(&self, column: &ColumnSpec) -> String {
        // u64 does not fit BIGINT
        let sql = if column.unsigned { "NUMERIC(20,0)" } else { "BIGINT" };
        with_nullability(sql, column)
    }

    fn date_time_declaration(&self, column: &ColumnSpec) -> String {
        with_nullability("TIMESTAMP(0) WITHOUT TIME ZONE", column)
    }

    fn date_declaration(&self, column: &ColumnSpec) -> String {
        with_nullability("DATE", column)
    }

    fn date_time_format(&self) -> &str {
        &self.date_time_format
    }

    fn date_format(&self) -> &str {
        &self.date_format
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MySqlPlatform {
    date_format: String,
    date_time_format: String,
}

impl MySqlPlatform {
    pub fn new() -> Self {
        Self::with_formats(None, None)
    }

    pub fn with_formats(date_format: Option<String>, date_time_format: Option<String>) -> Self {
        Self {
            date_format: date_format.unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string()),
            date_time_format: date_time_format
                .unwrap_or_else(|| DEFAULT_DATE_TIME_FORMAT.to_string()),
        }
    }

    fn integer_type(base: &str, column: &ColumnSpec) -> String {
        if column.unsigned {
            with_nullability(&format!("{} UNSIGNED", base), column)
        } else {
            with_nullability(base, column)
        }
    }
}

impl Default for MySqlPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for MySqlPlatform {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn small_int_declaration(&self, column: &ColumnSpec) -> String {
        Self::integer_type("SMALLINT", column)
    }

    fn integer_declaration(&self, column: &ColumnSpec) -> String {
        Self::integer_type("INT", column)
    }

    fn big_int_declaration(&self, column: &ColumnSpec) -> String {
        Self::integer_type("BIGINT", column)
    }

    fn date_time_declaration(&self, column: &ColumnSpec) -> String {
        with_nullability("DATETIME", column)
    }

    fn date_declaration(&self, column: &ColumnSpec) -> String {
        with_nullability("DATE", column)
    }

    fn date_time_format(&self) -> &str {
        &self.date_time_format
    }

    fn date_format(&self) -> &str {
        &self.date_format
    }
}

/// Build the platform described by the configuration
pub fn platform_from_config(config: &PlatformConfig) -> Box<dyn Platform> {
    let date_format = config.date_format.clone();
    let date_time_format = config.date_time_format.clone();

    match config.kind {
        PlatformKind::Postgres => Box::new(PostgresPlatform::with_formats(
            date_format,
            date_time_format,
        )),
        PlatformKind::MySql => Box::new(MySqlPlatform::with_formats(date_format, date_time_format)),
    }
}
