pub mod config;
pub mod error;
pub mod host;
pub mod locale;
pub mod manifest;
pub mod provider;
pub mod registry;
pub mod stored;
pub mod validation;

pub use config::{ComposeConfig, Field};
pub use error::AppError;
pub use locale::Locale;
pub use stored::{CONFIG_VERSION, StoredConfig, StoredVersion};
pub use validation::{ValidationError, is_valid, validate};
