//! In-memory storage substrate - used for tests and throwaway sessions.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use boostblog_core::StorageError;
use boostblog_core::ports::KeyValueStore;

/// In-memory key-value store using a HashMap behind an async RwLock.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryStorage {
    store: RwLock<HashMap<String, String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one value, e.g. data left by a previous run.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut map = HashMap::new();
        map.insert(key.to_string(), value.to_string());
        Self {
            store: RwLock::new(map),
        }
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let store = self.store.read().await;
        Ok(store.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut store = self.store.write().await;
        store.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
