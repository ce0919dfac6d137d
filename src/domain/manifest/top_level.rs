use super::scalar::plain_or_quoted;
use super::services::{NETWORK, named_volume};
use crate::domain::config::{ComposeConfig, VolumeType};

const NETWORK_DRIVER: &str = "bridge";

/// Top-level `volumes:`; only declared for an internal database on a named volume.
pub fn build_volumes(config: &ComposeConfig) -> Vec<String> {
    if !config.has_internal_database() || config.volume_type != VolumeType::Named {
        return Vec::new();
    }
    vec!["volumes:".to_string(), format!("  {}:", plain_or_quoted(named_volume(config)))]
}

pub fn build_networks() -> Vec<String> {
    vec![
        "networks:".to_string(),
        format!("  {NETWORK}:"),
        format!("    driver: {NETWORK_DRIVER}"),
    ]
}
