//! File-based post storage.
//!
//! The entire collection lives in one JSON document on disk. Writes go
//! through a temp file + rename so a crash mid-write cannot leave a
//! truncated document behind.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::fs;

use crate::model::Collection;
use crate::store::error::{StorageError, StorageResult};
use crate::store::PostStore;

/// File-based implementation of `PostStore`.
#[derive(Debug, Clone)]
pub struct FilePostStore {
    path: PathBuf,
}

impl FilePostStore {
    /// Create a store backed by the JSON document at `path`.
    ///
    /// The file is not created until the first successful `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Ensure the parent directory exists.
    async fn ensure_parent_dir(&self) -> StorageResult<()> {
        let Some(parent) = self.path.parent() else {
            return Ok(());
        };
        if parent.as_os_str().is_empty() {
            return Ok(());
        }
        fs::create_dir_all(parent)
            .await
            .map_err(|e| StorageError::file_io(parent, e))
    }
}

#[async_trait]
impl PostStore for FilePostStore {
    async fn load(&self) -> StorageResult<Option<Collection>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::file_io(&self.path, e)),
        };

        let collection: Collection = serde_json::from_str(&content)
            .map_err(|e| StorageError::file_deserialization(&self.path, e.to_string()))?;

        Ok(Some(collection))
    }

    async fn save(&self, collection: &Collection) -> StorageResult<()> {
        self.ensure_parent_dir().await?;

        let content = serde_json::to_string(collection)
            .map_err(|e| StorageError::serialization(e.to_string()))?;

        // Concurrent saves must not share a temp path: the rename is what
        // makes the write atomic, and a shared temp file could be renamed
        // away under the slower writer. The last rename still wins with a
        // complete document either way.
        static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);
        let n = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let temp_path = self.path.with_extension(format!("json.tmp.{n}"));

        // Write to temp file first
        fs::write(&temp_path, content)
            .await
            .map_err(|e| StorageError::file_io(&temp_path, e))?;

        // Atomic rename
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| StorageError::file_io(&self.path, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Post;
    use tempfile::TempDir;

    fn test_post(title: &str) -> Post {
        Post {
            title: title.to_string(),
            content: "body".to_string(),
            author: "tester".to_string(),
            created_at: "2024-06-01T12:00:00Z".to_string(),
        }
    }

    fn create_store(temp_dir: &TempDir) -> FilePostStore {
        FilePostStore::new(temp_dir.path().join("data.json"))
    }

    #[tokio::test]
    async fn load_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_store(&temp_dir);

        let loaded = store.load().await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_store(&temp_dir);

        let collection = Collection {
            posts: vec![test_post("one"), test_post("two")],
        };
        store.save(&collection).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, collection);
    }

    #[tokio::test]
    async fn save_overwrites_whole_document() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_store(&temp_dir);

        store
            .save(&Collection {
                posts: vec![test_post("one"), test_post("two")],
            })
            .await
            .unwrap();
        store
            .save(&Collection {
                posts: vec![test_post("three")],
            })
            .await
            .unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.posts[0].title, "three");
    }

    #[tokio::test]
    async fn load_corrupt_file_is_deserialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        std::fs::write(&path, "{not valid json").unwrap();

        let store = FilePostStore::new(&path);
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StorageError::FileDeserialization { .. }));
    }

    #[tokio::test]
    async fn save_creates_missing_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePostStore::new(temp_dir.path().join("nested/dir/data.json"));

        store.save(&Collection::default()).await.unwrap();
        assert!(store.load().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn save_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_store(&temp_dir);

        store.save(&Collection::default()).await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["data.json"]);
    }
}
