//! Versioned envelope for persisted configurations.

use serde::{Deserialize, Serialize};

use crate::domain::config::ComposeConfig;

/// Schema version of persisted configurations. Bump to invalidate old saves.
pub const CONFIG_VERSION: &str = "2.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredConfig {
    pub version: String,
    pub config: ComposeConfig,
}

/// Only the version tag of a stored file, readable whatever schema the body uses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoredVersion {
    pub version: String,
}

impl StoredVersion {
    pub fn is_current(&self) -> bool {
        self.version == CONFIG_VERSION
    }
}

impl StoredConfig {
    pub fn current(config: ComposeConfig) -> Self {
        Self { version: CONFIG_VERSION.to_string(), config }
    }

    pub fn is_current(&self) -> bool {
        self.version == CONFIG_VERSION
    }

    /// The stored configuration when its version matches, defaults otherwise.
    pub fn into_config(self) -> ComposeConfig {
        if self.is_current() { self.config } else { ComposeConfig::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_version_yields_defaults() {
        let config = ComposeConfig { http_port: "9000".into(), ..ComposeConfig::default() };
        let stored = StoredConfig { version: "1.0".into(), config };

        assert!(!stored.is_current());
        assert_eq!(stored.into_config(), ComposeConfig::default());
    }

    #[test]
    fn version_tag_reads_despite_unknown_body() {
        let tag: StoredVersion =
            toml::from_str("version = \"1.0\"\n[config]\ndatabaseType = \"mysql\"\n").unwrap();

        assert_eq!(tag.version, "1.0");
        assert!(!tag.is_current());
    }

    #[test]
    fn current_version_keeps_values() {
        let config = ComposeConfig { http_port: "9000".into(), ..ComposeConfig::default() };
        let stored = StoredConfig::current(config.clone());

        assert_eq!(stored.into_config(), config);
    }
}
