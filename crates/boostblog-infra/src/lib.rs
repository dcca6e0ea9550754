//! # BoostBlog Infrastructure
//!
//! Concrete implementations of the ports defined in `boostblog-core`.
//!
//! ## Feature Flags
//!
//! - `fs` (default) - File-backed storage substrate
//!
//! Without `fs` only the in-memory substrate is available.

pub mod posts;
pub mod storage;

pub use posts::{PostStore, StoreConfig};
pub use storage::InMemoryStorage;

#[cfg(feature = "fs")]
pub use storage::FileStorage;
