//! Configuration fixtures shared by unit tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::config::{
    ApiProvider, ComposeConfig, DatabaseType, HostOs, ImageRegistry, LicenseKeyType, Profile,
    VolumeType,
};

/// Timestamp used wherever output must be reproducible.
pub fn fixed_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// A complete, valid configuration with an internal database.
pub fn mock_config() -> ComposeConfig {
    ComposeConfig {
        profile: Profile::QuickStart,
        http_port: "8080".into(),
        container_name: "hagicode".into(),
        image_tag: "latest".into(),
        host_os: HostOs::Linux,
        image_registry: ImageRegistry::DockerHub,
        database_type: DatabaseType::Internal,
        postgres_database: "hagicode".into(),
        postgres_user: "postgres".into(),
        postgres_password: "postgres".into(),
        external_db_host: String::new(),
        external_db_port: String::new(),
        volume_type: VolumeType::Named,
        volume_name: "postgres-data".into(),
        volume_path: String::new(),
        license_key_type: LicenseKeyType::Public,
        license_key: "public-license-key".into(),
        anthropic_api_provider: ApiProvider::Anthropic,
        anthropic_auth_token: "test-token".into(),
        anthropic_url: String::new(),
        workdir_path: "/home/user/repos".into(),
        workdir_created_by_root: true,
        puid: "1000".into(),
        pgid: "1000".into(),
    }
}

pub fn windows_config() -> ComposeConfig {
    ComposeConfig {
        host_os: HostOs::Windows,
        workdir_path: "C:\\\\repos".into(),
        workdir_created_by_root: true,
        ..mock_config()
    }
}

pub fn linux_non_root_config() -> ComposeConfig {
    ComposeConfig {
        host_os: HostOs::Linux,
        workdir_created_by_root: false,
        puid: "1000".into(),
        pgid: "1000".into(),
        ..mock_config()
    }
}

pub fn external_db_config() -> ComposeConfig {
    ComposeConfig {
        database_type: DatabaseType::External,
        external_db_host: "localhost".into(),
        external_db_port: "5432".into(),
        ..mock_config()
    }
}

pub fn provider_config(provider: ApiProvider) -> ComposeConfig {
    let anthropic_url = match provider {
        ApiProvider::Custom => "https://custom-api.example.com".to_string(),
        ApiProvider::Anthropic | ApiProvider::Zai => String::new(),
    };
    ComposeConfig { anthropic_api_provider: provider, anthropic_url, ..mock_config() }
}
