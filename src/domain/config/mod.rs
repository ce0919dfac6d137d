//! Deployment configuration model.

mod defaults;
mod field;
mod model;

pub use defaults::{
    ASPNET_ENVIRONMENT, CONTAINER_PORT, DEFAULT_VOLUME_NAME, PUBLIC_LICENSE_KEY, TIMEZONE,
};
pub use field::Field;
pub use model::{
    ApiProvider, ComposeConfig, DatabaseType, HostOs, ImageRegistry, LicenseKeyType, Profile,
    VolumeType,
};
