mod config_store;
mod translator;

pub use config_store::ConfigStore;
pub use translator::Translator;
