use std::io;

use thiserror::Error;

use crate::domain::config::Field;

/// Library-wide error type for hagicode-compose operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Field name does not exist in the configuration schema.
    #[error("Unknown configuration field '{0}'")]
    UnknownField(String),

    /// Value cannot be assigned to the field.
    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidFieldValue { field: Field, value: String },

    /// Locale tag is not supported.
    #[error("Unsupported locale '{0}': must be one of zh-CN, en-US")]
    InvalidLocale(String),

    /// Timestamp could not be parsed as RFC 3339.
    #[error("Invalid timestamp '{0}': expected RFC 3339 (e.g. 2024-01-01T00:00:00Z)")]
    InvalidTimestamp(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
