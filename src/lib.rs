//! hagicode-compose: render Hagicode deployment settings into a Docker Compose manifest.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use chrono::{DateTime, Utc};

use adapters::EmbeddedCatalog;

pub use adapters::{FilesystemConfigStore, MemoryConfigStore};
pub use app::config::{AppConfig, read_config_file};
pub use domain::config::{
    ApiProvider, DatabaseType, HostOs, ImageRegistry, LicenseKeyType, Profile, VolumeType,
};
pub use domain::manifest::generate_with;
pub use domain::registry::{RegistryProfile, registry_profile};
pub use domain::{
    AppError, ComposeConfig, Field, Locale, StoredConfig, ValidationError, is_valid, validate,
};
pub use ports::{ConfigStore, Translator};

/// Render `config` as a docker-compose manifest using the built-in translations.
///
/// Pure: the same inputs always yield the same document.
pub fn generate(config: &ComposeConfig, locale: Locale, timestamp: DateTime<Utc>) -> String {
    generate_with(config, locale, timestamp, &EmbeddedCatalog)
}
