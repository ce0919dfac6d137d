use std::sync::{Arc, Mutex};

use crate::domain::{AppError, ComposeConfig};
use crate::ports::ConfigStore;

/// In-memory configuration store for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    config: Arc<Mutex<Option<ComposeConfig>>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ComposeConfig) -> Self {
        Self { config: Arc::new(Mutex::new(Some(config))) }
    }

    /// Whether anything has been saved.
    pub fn is_empty(&self) -> bool {
        self.lock().is_none()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<ComposeConfig>> {
        self.config.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<ComposeConfig, AppError> {
        Ok(self.lock().clone().unwrap_or_default())
    }

    fn save(&self, config: &ComposeConfig) -> Result<(), AppError> {
        *self.lock() = Some(config.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        *self.lock() = None;
        Ok(())
    }
}
