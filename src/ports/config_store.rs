use crate::domain::{AppError, ComposeConfig};

/// Port for persisting the user's configuration between runs.
pub trait ConfigStore {
    /// Load the saved configuration.
    ///
    /// Returns defaults when nothing is saved or the saved schema version
    /// does not match the current one.
    fn load(&self) -> Result<ComposeConfig, AppError>;

    /// Persist `config` tagged with the current schema version.
    fn save(&self, config: &ComposeConfig) -> Result<(), AppError>;

    /// Forget any saved configuration.
    fn clear(&self) -> Result<(), AppError>;
}
