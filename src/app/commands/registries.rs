use crate::domain::config::ImageRegistry;
use crate::domain::registry::{RegistryProfile, registry_profile};

/// Every registry, recommended first.
pub fn list() -> Vec<RegistryProfile> {
    let mut profiles: Vec<RegistryProfile> =
        ImageRegistry::ALL.into_iter().map(registry_profile).collect();
    profiles.sort_by_key(|profile| !profile.recommended);
    profiles
}
