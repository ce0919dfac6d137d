use serde::{Deserialize, Serialize};

/// Level of configuration complexity exposed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    /// Minimal options for first-time deployments.
    #[default]
    QuickStart,
    /// Every field is editable.
    FullCustom,
}

/// Operating system of the machine running the compose project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HostOs {
    Windows,
    #[default]
    Linux,
}

/// Container registry the images are pulled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ImageRegistry {
    DockerHub,
    AzureAcr,
    #[default]
    AliyunAcr,
}

impl ImageRegistry {
    pub const ALL: [ImageRegistry; 3] =
        [ImageRegistry::AliyunAcr, ImageRegistry::DockerHub, ImageRegistry::AzureAcr];
}

/// Database backing the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    /// File database bundled inside the application container.
    #[default]
    Sqlite,
    /// PostgreSQL service deployed next to the application.
    Internal,
    /// PostgreSQL server reachable over the network.
    External,
}

/// Storage flavour for the internal database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VolumeType {
    #[default]
    Named,
    Bind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LicenseKeyType {
    #[default]
    Public,
    Custom,
}

/// Upstream API provider.
///
/// All providers share `ANTHROPIC_AUTH_TOKEN`; they differ in how
/// `ANTHROPIC_URL` is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApiProvider {
    /// Official API, token only.
    Anthropic,
    /// Zhipu AI, token plus a fixed endpoint.
    #[default]
    Zai,
    /// Any Anthropic-compatible endpoint supplied by the user.
    Custom,
}

/// Deployment settings rendered into a compose manifest.
///
/// Missing keys deserialize to their defaults, so partial documents overlay
/// the default configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComposeConfig {
    pub profile: Profile,

    pub http_port: String,
    pub container_name: String,
    pub image_tag: String,
    #[serde(rename = "hostOS")]
    pub host_os: HostOs,
    pub image_registry: ImageRegistry,

    pub database_type: DatabaseType,
    pub postgres_database: String,
    pub postgres_user: String,
    pub postgres_password: String,
    pub external_db_host: String,
    pub external_db_port: String,
    pub volume_type: VolumeType,
    pub volume_name: String,
    pub volume_path: String,

    pub license_key_type: LicenseKeyType,
    pub license_key: String,

    pub anthropic_api_provider: ApiProvider,
    pub anthropic_auth_token: String,
    pub anthropic_url: String,

    pub workdir_path: String,
    pub workdir_created_by_root: bool,
    pub puid: String,
    pub pgid: String,
}

impl ComposeConfig {
    /// Switch profile. Quick start only supports the embedded database, so
    /// selecting it resets `database_type` to SQLite.
    pub fn set_profile(&mut self, profile: Profile) {
        self.profile = profile;
        if profile == Profile::QuickStart {
            self.database_type = DatabaseType::Sqlite;
        }
    }

    /// Whether the PostgreSQL service is part of the deployment.
    pub fn has_internal_database(&self) -> bool {
        self.database_type == DatabaseType::Internal
    }

    /// Whether the app container needs explicit PUID/PGID mapping.
    pub fn needs_user_mapping(&self) -> bool {
        self.host_os == HostOs::Linux && !self.workdir_created_by_root
    }
}
