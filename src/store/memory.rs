//! In-memory post storage for tests.

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::model::Collection;
use crate::store::error::{StorageError, StorageResult};
use crate::store::PostStore;

/// In-memory implementation of `PostStore`.
///
/// Mirrors the file backend's contract: `None` until the first save, full
/// document replaced on every save. The failure switches inject a backend
/// error into the next load or save so handler 500 paths can be exercised.
#[derive(Debug, Clone, Default)]
pub struct MemoryPostStore {
    inner: Arc<Mutex<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    collection: Option<Collection>,
    fail_next_load: bool,
    fail_next_save: bool,
}

impl MemoryPostStore {
    /// Create an empty store, equivalent to a file that does not exist yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a collection.
    pub fn with_collection(collection: Collection) -> Self {
        let store = Self::new();
        store.inner.lock().unwrap().collection = Some(collection);
        store
    }

    /// Make the next `load` fail with a backend error.
    pub fn fail_next_load(&self) {
        self.inner.lock().unwrap().fail_next_load = true;
    }

    /// Make the next `save` fail with a backend error.
    pub fn fail_next_save(&self) {
        self.inner.lock().unwrap().fail_next_save = true;
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn load(&self) -> StorageResult<Option<Collection>> {
        let mut inner = self.inner.lock().unwrap();
        if std::mem::take(&mut inner.fail_next_load) {
            return Err(StorageError::backend("injected load failure"));
        }
        Ok(inner.collection.clone())
    }

    async fn save(&self, collection: &Collection) -> StorageResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if std::mem::take(&mut inner.fail_next_save) {
            return Err(StorageError::backend("injected save failure"));
        }
        inner.collection = Some(collection.clone());
        Ok(())
    }
}
