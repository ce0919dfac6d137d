pub mod catalog;
pub mod config_store_filesystem;
pub mod memory_config_store;

pub use catalog::EmbeddedCatalog;
pub use config_store_filesystem::FilesystemConfigStore;
pub use memory_config_store::MemoryConfigStore;
