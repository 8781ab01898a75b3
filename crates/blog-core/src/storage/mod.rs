//! Storage abstraction
//!
//! Posts and users are persisted through the [`BlogStorage`] trait; the
//! services never know which backend they talk to. Stored records are
//! wrapped in a [`RecordFile`] carrying a schema version.

pub mod migration;
mod persistence;

pub use migration::{RecordFile, CURRENT_SCHEMA_VERSION};
pub use persistence::BlogStorage;

// Re-export memory storage for testing
#[cfg(test)]
pub use persistence::memory::MemoryStorage;
