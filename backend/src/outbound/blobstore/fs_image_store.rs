//! Filesystem implementation of the image store port.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::trace;

use crate::domain::ports::{ImageStore, ImageStoreError};

/// `ImageStore` writing one file per blob key under a root directory.
///
/// Keys are repository-generated UUID strings; anything resembling a path
/// is rejected rather than resolved.
#[derive(Debug, Clone)]
pub struct FsImageStore {
    root: PathBuf,
}

impl FsImageStore {
    /// Create a store rooted at `root`. The directory is created lazily on
    /// first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn blob_path(&self, key: &str) -> Result<PathBuf, ImageStoreError> {
        if key.is_empty()
            || key
                .chars()
                .any(|c| !(c.is_ascii_alphanumeric() || c == '-'))
        {
            return Err(ImageStoreError::io(format!("invalid blob key: {key:?}")));
        }
        Ok(self.root.join(key))
    }
}

fn map_io_error(context: &str, path: &Path, error: &io::Error) -> ImageStoreError {
    ImageStoreError::io(format!("{context} {}: {error}", path.display()))
}

#[async_trait]
impl ImageStore for FsImageStore {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), ImageStoreError> {
        let path = self.blob_path(key)?;
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| map_io_error("failed to create blob root", &self.root, &e))?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| map_io_error("failed to write blob", &path, &e))?;
        trace!(key, length = bytes.len(), "blob written");
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, ImageStoreError> {
        let path = self.blob_path(key)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(map_io_error("failed to read blob", &path, &e)),
        }
    }

    async fn remove(&self, key: &str) -> Result<(), ImageStoreError> {
        let path = self.blob_path(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(map_io_error("failed to remove blob", &path, &e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, FsImageStore) {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = FsImageStore::new(dir.path());
        (dir, store)
    }

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let (_guard, store) = store();
        store.put("abc-123", &[1, 2, 3]).await.expect("put");
        let bytes = store.get("abc-123").await.expect("get");
        assert_eq!(bytes, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn get_for_unknown_key_is_none() {
        let (_guard, store) = store();
        assert_eq!(store.get("missing").await.expect("get"), None);
    }

    #[tokio::test]
    async fn put_replaces_previous_bytes() {
        let (_guard, store) = store();
        store.put("abc", &[1]).await.expect("put");
        store.put("abc", &[2, 3]).await.expect("put again");
        assert_eq!(store.get("abc").await.expect("get"), Some(vec![2, 3]));
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let (_guard, store) = store();
        store.put("abc", &[1]).await.expect("put");
        store.remove("abc").await.expect("remove");
        store.remove("abc").await.expect("remove again");
        assert_eq!(store.get("abc").await.expect("get"), None);
    }

    #[tokio::test]
    async fn path_like_keys_are_rejected() {
        let (_guard, store) = store();
        let error = store.get("../escape").await.expect_err("rejected");
        assert!(matches!(error, ImageStoreError::Io { .. }));
    }
}
