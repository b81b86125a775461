//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use bulletin::config::{ApiConfig, Config, StoreConfig};
use bulletin::PostStore;
use std::path::PathBuf;
use tempfile::TempDir;

use mock_backend::MockBackend;

/// Config pointing at a mock server, with short timeouts.
pub fn test_config(base_url: &str) -> Config {
    Config {
        api: ApiConfig {
            base_url: base_url.to_string(),
            timeout_seconds: 5,
            connect_timeout_seconds: 2,
        },
        store: StoreConfig {
            mailbox_capacity: 16,
        },
    }
}

/// A post store wired to `mock`.
pub fn store_for(mock: &MockBackend) -> PostStore {
    PostStore::from_config(&test_config(&mock.posts_url())).expect("store from config")
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
