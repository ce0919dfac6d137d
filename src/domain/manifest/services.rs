use super::scalar::{double_quoted, plain_or_quoted, plain_or_quoted_number};
use crate::domain::config::{
    ASPNET_ENVIRONMENT, CONTAINER_PORT, ComposeConfig, DEFAULT_VOLUME_NAME, DatabaseType,
    LicenseKeyType, PUBLIC_LICENSE_KEY, TIMEZONE, VolumeType,
};
use crate::domain::host::{host_paths, or_default};
use crate::domain::provider::provider_profile;
use crate::domain::registry::registry_profile;

pub const APP_SERVICE: &str = "hagicode";
pub const DATABASE_SERVICE: &str = "postgres";
pub const NETWORK: &str = "pcode-network";
pub const RESTART_POLICY: &str = "unless-stopped";

const WORKDIR_MOUNT: &str = "/app/workdir";
const DATABASE_DATA_DIR: &str = "/bitnami/postgresql";
const DATABASE_PORT: u16 = 5432;
const SQLITE_CONNECTION: &str = "Data Source=/app/data/hagicode.db";
const HEALTHCHECK_TEST: &str = r#"["CMD", "pg_isready", "-U", "postgres"]"#;

/// `services:` with the app and, for an internal database, PostgreSQL.
pub fn build_services(config: &ComposeConfig) -> Vec<String> {
    let mut lines = vec!["services:".to_string()];
    lines.extend(build_app_service(config));
    lines.extend(build_database_service(config));
    lines
}

pub fn build_app_service(config: &ComposeConfig) -> Vec<String> {
    let registry = registry_profile(config.image_registry);
    let workdir = or_default(&config.workdir_path, host_paths(config.host_os).workdir);

    let mut lines = vec![
        format!("  {APP_SERVICE}:"),
        format!("    image: {}", plain_or_quoted(&registry.app_image(&config.image_tag))),
        format!("    container_name: {}", plain_or_quoted(&config.container_name)),
        "    environment:".to_string(),
    ];
    lines.extend(app_environment(config));
    lines.push("    ports:".to_string());
    lines.push(format!("      - {}", double_quoted(&format!("{}:{CONTAINER_PORT}", config.http_port))));
    lines.push("    volumes:".to_string());
    lines.push(format!("      - {}", mount(workdir, WORKDIR_MOUNT)));
    lines.extend(network_attachment());
    if config.has_internal_database() {
        lines.extend([
            "    depends_on:".to_string(),
            format!("      {DATABASE_SERVICE}:"),
            "        condition: service_healthy".to_string(),
        ]);
    }
    lines.push(format!("    restart: {RESTART_POLICY}"));
    lines
}

fn app_environment(config: &ComposeConfig) -> Vec<String> {
    let env = |key: &str, value: String| format!("      {key}: {value}");
    let provider = provider_profile(config.anthropic_api_provider);

    let mut lines = vec![
        env("ASPNETCORE_ENVIRONMENT", ASPNET_ENVIRONMENT.to_string()),
        env("ASPNETCORE_URLS", format!("http://+:{CONTAINER_PORT}")),
        env("TZ", TIMEZONE.to_string()),
        env("ConnectionStrings__Default", double_quoted(&connection_string(config))),
        env("License__Activation__LicenseKey", double_quoted(license_key(config))),
    ];
    lines.extend(provider.comments.iter().map(|comment| format!("      {comment}")));
    lines.push(env("ANTHROPIC_AUTH_TOKEN", double_quoted(&config.anthropic_auth_token)));
    if let Some(url) = provider.endpoint_url(&config.anthropic_url) {
        lines.push(env("ANTHROPIC_URL", double_quoted(url)));
    }
    if config.needs_user_mapping() {
        lines.push(env("PUID", plain_or_quoted_number(&config.puid)));
        lines.push(env("PGID", plain_or_quoted_number(&config.pgid)));
    }
    lines
}

fn connection_string(config: &ComposeConfig) -> String {
    let credentials = format!(
        "Database={};Username={};Password={}",
        config.postgres_database, config.postgres_user, config.postgres_password
    );
    match config.database_type {
        DatabaseType::Sqlite => SQLITE_CONNECTION.to_string(),
        DatabaseType::Internal => {
            format!("Host={DATABASE_SERVICE};Port={DATABASE_PORT};{credentials}")
        }
        DatabaseType::External => format!(
            "Host={};Port={};{credentials}",
            config.external_db_host, config.external_db_port
        ),
    }
}

fn license_key(config: &ComposeConfig) -> &str {
    match config.license_key_type {
        LicenseKeyType::Public => or_default(&config.license_key, PUBLIC_LICENSE_KEY),
        LicenseKeyType::Custom => &config.license_key,
    }
}

/// The PostgreSQL service; empty unless the database is internal.
pub fn build_database_service(config: &ComposeConfig) -> Vec<String> {
    if !config.has_internal_database() {
        return Vec::new();
    }

    let registry = registry_profile(config.image_registry);
    let data_source = match config.volume_type {
        VolumeType::Named => named_volume(config),
        VolumeType::Bind => or_default(&config.volume_path, host_paths(config.host_os).database_bind),
    };

    let mut lines = vec![
        String::new(),
        format!("  {DATABASE_SERVICE}:"),
        format!("    image: {}", registry.database_image),
        "    environment:".to_string(),
        format!("      POSTGRES_DB: {}", plain_or_quoted(&config.postgres_database)),
        format!("      POSTGRES_USER: {}", plain_or_quoted(&config.postgres_user)),
        format!("      POSTGRES_PASSWORD: {}", plain_or_quoted(&config.postgres_password)),
        format!("      TZ: {TIMEZONE}"),
        "    volumes:".to_string(),
        format!("      - {}", mount(data_source, DATABASE_DATA_DIR)),
        "    healthcheck:".to_string(),
        format!("      test: {HEALTHCHECK_TEST}"),
        "      interval: 10s".to_string(),
        "      timeout: 3s".to_string(),
        "      retries: 3".to_string(),
    ];
    lines.extend(network_attachment());
    lines.push(format!("    restart: {RESTART_POLICY}"));
    lines
}

/// Volume name with the blank-name fallback applied.
pub fn named_volume(config: &ComposeConfig) -> &str {
    or_default(&config.volume_name, DEFAULT_VOLUME_NAME)
}

fn network_attachment() -> [String; 2] {
    ["    networks:".to_string(), format!("      - {NETWORK}")]
}

/// `source:target` mount entry. Sources are written verbatim when possible.
fn mount(source: &str, target: &str) -> String {
    plain_or_quoted(&format!("{source}:{target}"))
}
