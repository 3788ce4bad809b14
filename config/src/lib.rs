//! # Configuration Management for TypeHaus
//!
//! This crate provides the configuration structures consumed by the TypeHaus
//! column types: which database platform renders the column DDL, which
//! date/date-time formats the platform stores, and the default size class of
//! bit mask columns.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{BitMaskConfig, PlatformConfig, PlatformKind, TypesConfig};
//!
//! let config = TypesConfig::new(
//!     PlatformConfig::new(PlatformKind::MySql, None, None),
//!     BitMaskConfig::new(Some("INT".to_string())),
//! );
//! assert_eq!(config.platform.kind, PlatformKind::MySql);
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [platform]
//! kind = "postgres"
//! date_format = "%Y-%m-%d"
//! date_time_format = "%Y-%m-%d %H:%M:%S"
//!
//! [bitmask]
//! default_size = "SMALLINT"
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::TypesConfig;
//!
//! // Load from typehaus.toml
//! let config = TypesConfig::load()?;
//!
//! // Or load from custom path
//! let config = TypesConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, fmt, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./typehaus.toml";
const CONFIG_PATH_VAR: &str = "TYPEHAUS_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete column type configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypesConfig {
    #[serde(default)]
    pub platform: PlatformConfig,
    #[serde(default)]
    pub bitmask: BitMaskConfig,
}

/// Supported database platforms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    #[default]
    Postgres,
    #[serde(alias = "mariadb")]
    MySql,
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformKind::Postgres => write!(f, "postgres"),
            PlatformKind::MySql => write!(f, "mysql"),
        }
    }
}

/// Database platform configuration
///
/// Format strings use chrono's strftime syntax. `None` keeps the platform default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformConfig {
    #[serde(default)]
    pub kind: PlatformKind,
    #[serde(default)]
    pub date_format: Option<String>,
    #[serde(default)]
    pub date_time_format: Option<String>,
}

/// Bit mask column configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BitMaskConfig {
    /// Size keyword used when a column carries no `field_type` hint
    #[serde(default)]
    pub default_size: Option<String>,
}

impl TypesConfig {
    /// Create a new configuration
    pub fn new(platform: PlatformConfig, bitmask: BitMaskConfig) -> Self {
        Self { platform, bitmask }
    }

    /// Load configuration from TOML file specified in .env or defaults
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is not an error, a malformed one is
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e.into()),
        }

        if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::from_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Err(ConfigError::Invalid(format!(
                "Config path must be specified in .env file as {} or in {} file",
                CONFIG_PATH_VAR, DEFAULT_CONFIG_PATH
            )))
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(format) = &self.platform.date_format {
            if format.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "Platform date_format cannot be empty".to_string(),
                ));
            }
        }
        if let Some(format) = &self.platform.date_time_format {
            if format.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "Platform date_time_format cannot be empty".to_string(),
                ));
            }
        }
        if let Some(size) = &self.bitmask.default_size {
            if size.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "Bitmask default_size cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl PlatformConfig {
    /// Create a new platform configuration
    pub fn new(
        kind: PlatformKind,
        date_format: Option<String>,
        date_time_format: Option<String>,
    ) -> Self {
        Self {
            kind,
            date_format,
            date_time_format,
        }
    }
}

impl BitMaskConfig {
    /// Create a new bit mask configuration
    pub fn new(default_size: Option<String>) -> Self {
        Self { default_size }
    }
}
