use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};

use super::model::ComposeConfig;
use crate::domain::AppError;

/// Name of a single configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Profile,
    HttpPort,
    ContainerName,
    ImageTag,
    HostOs,
    ImageRegistry,
    DatabaseType,
    PostgresDatabase,
    PostgresUser,
    PostgresPassword,
    ExternalDbHost,
    ExternalDbPort,
    VolumeType,
    VolumeName,
    VolumePath,
    LicenseKeyType,
    LicenseKey,
    AnthropicApiProvider,
    AnthropicAuthToken,
    AnthropicUrl,
    WorkdirPath,
    WorkdirCreatedByRoot,
    Puid,
    Pgid,
}

impl Field {
    pub const ALL: [Field; 24] = [
        Field::Profile,
        Field::HttpPort,
        Field::ContainerName,
        Field::ImageTag,
        Field::HostOs,
        Field::ImageRegistry,
        Field::DatabaseType,
        Field::PostgresDatabase,
        Field::PostgresUser,
        Field::PostgresPassword,
        Field::ExternalDbHost,
        Field::ExternalDbPort,
        Field::VolumeType,
        Field::VolumeName,
        Field::VolumePath,
        Field::LicenseKeyType,
        Field::LicenseKey,
        Field::AnthropicApiProvider,
        Field::AnthropicAuthToken,
        Field::AnthropicUrl,
        Field::WorkdirPath,
        Field::WorkdirCreatedByRoot,
        Field::Puid,
        Field::Pgid,
    ];

    /// Key used in serialized configuration documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Profile => "profile",
            Field::HttpPort => "httpPort",
            Field::ContainerName => "containerName",
            Field::ImageTag => "imageTag",
            Field::HostOs => "hostOS",
            Field::ImageRegistry => "imageRegistry",
            Field::DatabaseType => "databaseType",
            Field::PostgresDatabase => "postgresDatabase",
            Field::PostgresUser => "postgresUser",
            Field::PostgresPassword => "postgresPassword",
            Field::ExternalDbHost => "externalDbHost",
            Field::ExternalDbPort => "externalDbPort",
            Field::VolumeType => "volumeType",
            Field::VolumeName => "volumeName",
            Field::VolumePath => "volumePath",
            Field::LicenseKeyType => "licenseKeyType",
            Field::LicenseKey => "licenseKey",
            Field::AnthropicApiProvider => "anthropicApiProvider",
            Field::AnthropicAuthToken => "anthropicAuthToken",
            Field::AnthropicUrl => "anthropicUrl",
            Field::WorkdirPath => "workdirPath",
            Field::WorkdirCreatedByRoot => "workdirCreatedByRoot",
            Field::Puid => "puid",
            Field::Pgid => "pgid",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::UnknownField(s.to_string()))
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl ComposeConfig {
    /// Assign a field from its textual form.
    ///
    /// Enum fields accept their serialized names, booleans accept `true` or
    /// `false`, and string fields take the value verbatim. Changing the
    /// profile goes through [`ComposeConfig::set_profile`].
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), AppError> {
        match field {
            Field::Profile => {
                let profile = parse_choice(field, value)?;
                self.set_profile(profile);
            }
            Field::HostOs => self.host_os = parse_choice(field, value)?,
            Field::ImageRegistry => self.image_registry = parse_choice(field, value)?,
            Field::DatabaseType => self.database_type = parse_choice(field, value)?,
            Field::VolumeType => self.volume_type = parse_choice(field, value)?,
            Field::LicenseKeyType => self.license_key_type = parse_choice(field, value)?,
            Field::AnthropicApiProvider => {
                self.anthropic_api_provider = parse_choice(field, value)?
            }
            Field::WorkdirCreatedByRoot => {
                self.workdir_created_by_root = value.trim().parse().map_err(|_| {
                    AppError::InvalidFieldValue { field, value: value.to_string() }
                })?
            }
            Field::HttpPort => self.http_port = value.to_string(),
            Field::ContainerName => self.container_name = value.to_string(),
            Field::ImageTag => self.image_tag = value.to_string(),
            Field::PostgresDatabase => self.postgres_database = value.to_string(),
            Field::PostgresUser => self.postgres_user = value.to_string(),
            Field::PostgresPassword => self.postgres_password = value.to_string(),
            Field::ExternalDbHost => self.external_db_host = value.to_string(),
            Field::ExternalDbPort => self.external_db_port = value.to_string(),
            Field::VolumeName => self.volume_name = value.to_string(),
            Field::VolumePath => self.volume_path = value.to_string(),
            Field::LicenseKey => self.license_key = value.to_string(),
            Field::AnthropicAuthToken => self.anthropic_auth_token = value.to_string(),
            Field::AnthropicUrl => self.anthropic_url = value.to_string(),
            Field::WorkdirPath => self.workdir_path = value.to_string(),
            Field::Puid => self.puid = value.to_string(),
            Field::Pgid => self.pgid = value.to_string(),
        }
        Ok(())
    }
}

fn parse_choice<T: DeserializeOwned>(field: Field, value: &str) -> Result<T, AppError> {
    serde_json::from_value(serde_json::Value::String(value.trim().to_string()))
        .map_err(|_| AppError::InvalidFieldValue { field, value: value.to_string() })
}
