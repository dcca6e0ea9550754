use async_trait::async_trait;

use crate::error::StorageError;

/// Key-value persistence substrate - abstraction over durable string storage
/// (files on disk, in-memory maps).
///
/// Writes must be durable once `set` returns `Ok`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
