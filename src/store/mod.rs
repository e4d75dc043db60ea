//! Storage abstraction for the post collection.
//!
//! The trait models the two operations the handlers need: load the whole
//! document, save the whole document. There is no partial I/O. A missing
//! backing document is not an error at this layer — it surfaces as
//! `Ok(None)` and each handler decides what that means (empty collection
//! for list/create, not-found for get/update/delete).
//!
//! `FilePostStore` is the production backend; `MemoryPostStore` backs the
//! test suites. To add another backend, implement `PostStore` and wire it
//! up in `server.rs`.

pub mod error;

mod file;
mod memory;

use async_trait::async_trait;

use crate::model::Collection;

pub use error::{StorageError, StorageResult};
pub use file::FilePostStore;
pub use memory::MemoryPostStore;

/// Storage interface for the post collection.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Read the full document.
    ///
    /// Returns `Ok(None)` if the backing document does not exist yet.
    async fn load(&self) -> StorageResult<Option<Collection>>;

    /// Overwrite the full document.
    ///
    /// Atomic from the caller's perspective: a concurrent reader sees
    /// either the old document or the new one, never a partial write.
    async fn save(&self, collection: &Collection) -> StorageResult<()>;
}
