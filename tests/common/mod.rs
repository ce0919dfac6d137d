//! Shared testing utilities for hagicode-compose tests.

use assert_cmd::Command;
use chrono::{DateTime, TimeZone, Utc};
use hagicode_compose::{
    ApiProvider, ComposeConfig, DatabaseType, HostOs, ImageRegistry, LicenseKeyType, Profile,
    VolumeType,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated `$HOME` for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary inside the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("hagicode-compose").expect("Failed to locate hagicode-compose binary");
        cmd.current_dir(self.work_dir()).env("HOME", self.home()).env_remove("RUST_LOG");
        cmd
    }

    /// Path of the stored configuration file.
    pub fn stored_config_path(&self) -> PathBuf {
        self.home().join(".config").join("hagicode-compose").join("config.toml")
    }

    /// Write `content` to `name` inside the work directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir.join(name)).expect("Failed to read test file")
    }
}

#[allow(dead_code)]
pub fn fixed_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// A complete, valid configuration with an internal database.
#[allow(dead_code)]
pub fn mock_config() -> ComposeConfig {
    ComposeConfig {
        profile: Profile::FullCustom,
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

/// `mock_config` with the given database type and provider.
#[allow(dead_code)]
pub fn combination(database: DatabaseType, provider: ApiProvider) -> ComposeConfig {
    let anthropic_url = match provider {
        ApiProvider::Custom => "https://custom-api.example.com".to_string(),
        ApiProvider::Anthropic | ApiProvider::Zai => String::new(),
    };
    let (external_db_host, external_db_port) = match database {
        DatabaseType::External => ("db.example.com".to_string(), "5432".to_string()),
        DatabaseType::Sqlite | DatabaseType::Internal => (String::new(), String::new()),
    };
    ComposeConfig {
        database_type: database,
        anthropic_api_provider: provider,
        anthropic_url,
        external_db_host,
        external_db_port,
        ..mock_config()
    }
}
