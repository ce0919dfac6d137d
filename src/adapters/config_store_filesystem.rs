use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::app::config::AppConfig;
use crate::domain::{AppError, ComposeConfig, StoredConfig, StoredVersion};
use crate::ports::ConfigStore;

const CONFIG_FILE: &str = "config.toml";

/// Stores the configuration as TOML under the application storage path.
#[derive(Debug, Clone)]
pub struct FilesystemConfigStore {
    root_path: PathBuf,
}

impl FilesystemConfigStore {
    pub fn new(config: &AppConfig) -> Self {
        Self { root_path: config.storage_path.clone() }
    }

    pub fn new_default() -> Result<Self, AppError> {
        let config = AppConfig::new_default()?;
        Ok(Self::new(&config))
    }

    pub fn config_file(&self) -> PathBuf {
        self.root_path.join(CONFIG_FILE)
    }
}

impl ConfigStore for FilesystemConfigStore {
    fn load(&self) -> Result<ComposeConfig, AppError> {
        let path = self.config_file();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(ComposeConfig::default()),
            Err(err) => return Err(err.into()),
        };

        let tag: StoredVersion = match toml::from_str(&content) {
            Ok(tag) => tag,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "stored configuration is unreadable, using defaults");
                return Ok(ComposeConfig::default());
            }
        };
        if !tag.is_current() {
            warn!(
                path = %path.display(),
                version = %tag.version,
                "stored configuration has a stale version, discarding"
            );
            self.clear()?;
            return Ok(ComposeConfig::default());
        }

        match toml::from_str::<StoredConfig>(&content) {
            Ok(stored) => Ok(stored.into_config()),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "stored configuration is unreadable, using defaults");
                Ok(ComposeConfig::default())
            }
        }
    }

    fn save(&self, config: &ComposeConfig) -> Result<(), AppError> {
        fs::create_dir_all(&self.root_path)?;
        let content = toml::to_string_pretty(&StoredConfig::current(config.clone()))?;
        fs::write(self.config_file(), content)?;
        info!(path = %self.config_file().display(), "saved configuration");
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(self.config_file()) {
            Ok(()) => {
                info!(path = %self.config_file().display(), "cleared stored configuration");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
