//! Field-level validation of a deployment configuration.

use serde::Serialize;
use tracing::debug;

use crate::domain::config::{
    ApiProvider, ComposeConfig, DatabaseType, Field, LicenseKeyType, VolumeType,
};

/// A user-facing problem with one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    fn new(field: Field, message: &str) -> Self {
        Self { field, message: message.to_string() }
    }
}

/// Collect every validation error for `config`.
///
/// Rules are independent; unrelated fields can fail together. Errors come
/// back in a stable order.
pub fn validate(config: &ComposeConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    match leading_integer(&config.http_port) {
        None => errors.push(ValidationError::new(Field::HttpPort, "HTTP port must be a valid number")),
        Some(port) if !(1..=65535).contains(&port) => errors.push(ValidationError::new(
            Field::HttpPort,
            "HTTP port must be between 1 and 65535",
        )),
        Some(_) => {}
    }

    require(&mut errors, Field::ContainerName, &config.container_name, "Container name is required");
    require(&mut errors, Field::ImageTag, &config.image_tag, "Image tag is required");

    match config.database_type {
        DatabaseType::Sqlite => {}
        DatabaseType::Internal => {
            require_postgres_credentials(&mut errors, config);
            match config.volume_type {
                VolumeType::Named => require(
                    &mut errors,
                    Field::VolumeName,
                    &config.volume_name,
                    "Volume name is required for named volumes",
                ),
                VolumeType::Bind => require(
                    &mut errors,
                    Field::VolumePath,
                    &config.volume_path,
                    "Volume path is required for bind mounts",
                ),
            }
        }
        DatabaseType::External => {
            require(
                &mut errors,
                Field::ExternalDbHost,
                &config.external_db_host,
                "External database host is required",
            );
            if leading_integer(&config.external_db_port).is_none() {
                errors.push(ValidationError::new(
                    Field::ExternalDbPort,
                    "External database port must be a valid number",
                ));
            }
            require_postgres_credentials(&mut errors, config);
        }
    }

    if config.license_key_type == LicenseKeyType::Custom {
        require(&mut errors, Field::LicenseKey, &config.license_key, "Custom license key is required");
    }

    require(&mut errors, Field::AnthropicAuthToken, &config.anthropic_auth_token, "API token is required");

    if config.anthropic_api_provider == ApiProvider::Custom {
        require(
            &mut errors,
            Field::AnthropicUrl,
            &config.anthropic_url,
            "API endpoint URL is required for custom provider",
        );
    }

    require(&mut errors, Field::WorkdirPath, &config.workdir_path, "Work directory path is required");

    if config.needs_user_mapping() {
        if leading_integer(&config.puid).is_none() {
            errors.push(ValidationError::new(Field::Puid, "PUID must be a valid number"));
        }
        if leading_integer(&config.pgid).is_none() {
            errors.push(ValidationError::new(Field::Pgid, "PGID must be a valid number"));
        }
    }

    debug!(errors = errors.len(), database = ?config.database_type, "validated configuration");
    errors
}

/// Whether `config` passes every rule.
pub fn is_valid(config: &ComposeConfig) -> bool {
    validate(config).is_empty()
}

fn require(errors: &mut Vec<ValidationError>, field: Field, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(ValidationError::new(field, message));
    }
}

fn require_postgres_credentials(errors: &mut Vec<ValidationError>, config: &ComposeConfig) {
    require(errors, Field::PostgresDatabase, &config.postgres_database, "Database name is required");
    require(errors, Field::PostgresUser, &config.postgres_user, "Database user is required");
    require(
        errors,
        Field::PostgresPassword,
        &config.postgres_password,
        "Database password is required",
    );
}

/// Parse the integer at the start of `input`.
///
/// Leading whitespace and a sign are accepted and anything after the digits
/// is ignored, so `"8080abc"` yields 8080. Returns `None` when no digit
/// follows. Values beyond `i64` saturate.
pub(crate) fn leading_integer(input: &str) -> Option<i64> {
    let rest = input.trim_start();
    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(byte - b'0'));
    }

    seen_digit.then(|| if negative { -value } else { value })
}
