use crate::ports::{ConfigStore, Translator};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ConfigStore, T: Translator> {
    store: S,
    translator: T,
}

impl<S: ConfigStore, T: Translator> AppContext<S, T> {
    pub fn new(store: S, translator: T) -> Self {
        Self { store, translator }
    }

    /// Get a reference to the configuration store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }
}
