//! Configuration file handling.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, StoreConfig};
