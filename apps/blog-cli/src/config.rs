//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use clap::ValueEnum;

/// Which persistence substrate backs the post store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageKind {
    /// One JSON file per key in the data directory.
    File,
    /// Process memory; nothing survives the command.
    Memory,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageKind,
    pub data_dir: PathBuf,
    pub storage_key: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let storage = match env::var("BLOG_STORAGE") {
            Ok(v) if v.eq_ignore_ascii_case("memory") => StorageKind::Memory,
            _ => StorageKind::File,
        };

        Self {
            storage,
            data_dir: env::var("BLOG_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".boostblog")),
            storage_key: env::var("BLOG_STORAGE_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty())
                .unwrap_or_else(|| "posts".to_string()),
        }
    }

    /// Apply command line overrides on top of the environment.
    pub fn with_overrides(mut self, storage: Option<StorageKind>, data_dir: Option<PathBuf>) -> Self {
        if let Some(storage) = storage {
            self.storage = storage;
        }
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }
}
