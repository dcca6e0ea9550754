//! File-backed storage substrate.
//!
//! Each key maps to `<dir>/<key>.json`. Every write lands in its own temp
//! file that is flushed and then renamed over the target, so readers never
//! observe a partially written value, even with writers in other processes.
//! Concurrent writers are last-rename-wins.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use boostblog_core::StorageError;
use boostblog_core::ports::KeyValueStore;

/// Key-value store persisting one file per key in a data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Use `dir` as the data directory. It is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KeyValueStore for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).await?;

        let tmp = self.dir.join(format!(".{key}.{}.tmp", Uuid::new_v4().simple()));
        if let Err(e) = write_synced(&tmp, value).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        if let Err(e) = fs::rename(&tmp, &path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        tracing::debug!(key = %key, path = %path.display(), bytes = value.len(), "Value written");
        Ok(())
    }
}

async fn write_synced(path: &Path, value: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(value.as_bytes()).await?;
    file.sync_all().await
}
