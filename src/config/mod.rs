//! User configuration: where data lives and how screens order tasks.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{Config, Defaults, StorageConfig};
