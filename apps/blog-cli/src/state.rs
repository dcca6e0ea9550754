//! Application state - the post store every command works against.

use std::sync::Arc;

use boostblog_core::ports::KeyValueStore;
use boostblog_infra::{InMemoryStorage, PostStore, StoreConfig};

use crate::config::{AppConfig, StorageKind};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostStore>,
}

impl AppState {
    /// Build the state with the configured substrate.
    pub fn new(config: &AppConfig) -> Self {
        let storage: Arc<dyn KeyValueStore> = match config.storage {
            StorageKind::File => file_storage(config),
            StorageKind::Memory => {
                tracing::info!("Using in-memory storage, posts will not be kept");
                Arc::new(InMemoryStorage::new())
            }
        };

        let store_config = StoreConfig {
            key: config.storage_key.clone(),
            ..StoreConfig::default()
        };

        tracing::debug!(key = %store_config.key, "Post store initialized");

        Self {
            posts: Arc::new(PostStore::with_config(storage, store_config)),
        }
    }
}

#[cfg(feature = "fs")]
fn file_storage(config: &AppConfig) -> Arc<dyn KeyValueStore> {
    tracing::debug!(dir = %config.data_dir.display(), "Using file storage");
    Arc::new(boostblog_infra::FileStorage::new(&config.data_dir))
}

#[cfg(not(feature = "fs"))]
fn file_storage(_config: &AppConfig) -> Arc<dyn KeyValueStore> {
    tracing::warn!("Built without the fs feature - falling back to in-memory storage");
    Arc::new(InMemoryStorage::new())
}
