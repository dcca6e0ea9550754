//! Storage substrates - file-backed and in-memory.

mod memory;

pub use memory::InMemoryStorage;

#[cfg(feature = "fs")]
mod file;
#[cfg(feature = "fs")]
pub use file::FileStorage;
