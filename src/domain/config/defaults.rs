use super::model::{
    ApiProvider, ComposeConfig, DatabaseType, HostOs, ImageRegistry, LicenseKeyType, Profile,
    VolumeType,
};

/// License key distributed for public use.
pub const PUBLIC_LICENSE_KEY: &str = "D76B5C-EC0A70-AEA453-BC9414-0A198D-V3";

/// Named volume used when the user leaves the volume name blank.
pub const DEFAULT_VOLUME_NAME: &str = "postgres-data";

/// Port the application listens on inside its container.
pub const CONTAINER_PORT: u16 = 45000;

pub const ASPNET_ENVIRONMENT: &str = "Production";
pub const TIMEZONE: &str = "Asia/Shanghai";

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            profile: Profile::QuickStart,
            http_port: CONTAINER_PORT.to_string(),
            container_name: "hagicode-app".to_string(),
            image_tag: "0".to_string(),
            host_os: HostOs::Linux,
            image_registry: ImageRegistry::AliyunAcr,
            database_type: DatabaseType::Sqlite,
            postgres_database: "hagicode".to_string(),
            postgres_user: "postgres".to_string(),
            postgres_password: "postgres".to_string(),
            external_db_host: String::new(),
            external_db_port: String::new(),
            volume_type: VolumeType::Named,
            volume_name: DEFAULT_VOLUME_NAME.to_string(),
            volume_path: String::new(),
            license_key_type: LicenseKeyType::Public,
            license_key: PUBLIC_LICENSE_KEY.to_string(),
            anthropic_api_provider: ApiProvider::Zai,
            anthropic_auth_token: String::new(),
            anthropic_url: String::new(),
            workdir_path: String::new(),
            workdir_created_by_root: false,
            puid: "1000".to_string(),
            pgid: "1000".to_string(),
        }
    }
}
