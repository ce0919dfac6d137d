pub mod config;
pub mod generate;
pub mod registries;
pub mod validate;
