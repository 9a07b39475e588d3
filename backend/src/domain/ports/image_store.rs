//! Port abstraction for binary blob storage backing image attachments.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by blob store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageStoreError {
    /// The backing storage failed to read or write.
    #[error("image store i/o failed: {message}")]
    Io {
        /// Adapter-supplied description of the failure.
        message: String,
    },
}

impl ImageStoreError {
    /// Helper for i/o failures.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

/// Port for storing and retrieving image bytes by key.
///
/// Keys are opaque strings generated by the domain. A `get` for an unknown
/// key returns `Ok(None)`; only genuine storage failures are errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Write the bytes under `key`, replacing any previous content.
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), ImageStoreError>;

    /// Read the bytes stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, ImageStoreError>;

    /// Remove the bytes stored under `key`. Removing an absent key is not
    /// an error.
    async fn remove(&self, key: &str) -> Result<(), ImageStoreError>;
}
