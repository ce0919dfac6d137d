//! Application configuration and config file loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, ComposeConfig};

/// Application-wide configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the stored deployment configuration.
    pub storage_path: PathBuf,
}

impl AppConfig {
    pub fn with_path(path: PathBuf) -> Self {
        Self { storage_path: path }
    }

    /// Create configuration using the HOME-based config directory.
    ///
    /// Uses $HOME/.config/hagicode-compose for consistency across platforms and tests.
    pub fn new_default() -> Result<Self, AppError> {
        let home = std::env::var("HOME")
            .map_err(|_| AppError::config_error("HOME environment variable not set"))?;
        let storage_path = PathBuf::from(home).join(".config").join("hagicode-compose");
        Ok(Self { storage_path })
    }
}

/// Read a deployment configuration file, choosing the format by extension.
///
/// Keys missing from the file take their default values.
pub fn read_config_file(path: &Path) -> Result<ComposeConfig, AppError> {
    let content = fs::read_to_string(path).map_err(|err| {
        AppError::config_error(format!("Failed to read {}: {}", path.display(), err))
    })?;
    let extension =
        path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase).unwrap_or_default();

    let config: ComposeConfig = match extension.as_str() {
        "toml" => toml::from_str(&content)?,
        "json" => serde_json::from_str(&content)?,
        "yml" | "yaml" => serde_yaml::from_str(&content)?,
        other => {
            return Err(AppError::ParseError {
                what: path.display().to_string(),
                details: format!("unsupported extension '{other}' (expected toml, json, yml or yaml)"),
            });
        }
    };
    Ok(config)
}
