//! Driving port for the user resource operations.
//!
//! Inbound adapters (HTTP handlers) call this port so they depend only on
//! domain types, never on persistence concerns. Production backs it with
//! [`crate::domain::UsersService`]; tests can substitute any implementation.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserId, UserUpdate};

/// An image ready to be served: the bytes plus the recorded metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDownload {
    /// Content type recorded when the image was attached.
    pub content_type: String,
    /// Length of `bytes`. Implementations reconcile this with the recorded
    /// attachment metadata so it always describes the bytes being served.
    pub length: u64,
    /// The stored bytes.
    pub bytes: Vec<u8>,
}

/// Domain use-case port exposing the user resource operations.
///
/// Every operation taking an identifier short-circuits with a
/// [`crate::domain::ErrorCode::NotFound`] error when no record exists; no
/// writes happen past a failed lookup.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Return all users, in no guaranteed order.
    async fn list(&self) -> Result<Vec<User>, Error>;

    /// Persist a new user and return it with its assigned identifier.
    async fn create(&self, draft: NewUser) -> Result<User, Error>;

    /// Fetch a single user.
    async fn get(&self, id: &UserId) -> Result<User, Error>;

    /// Merge the submitted fields onto an existing user and persist it.
    async fn update(&self, id: &UserId, changes: UserUpdate) -> Result<User, Error>;

    /// Delete a user and, best effort, its attached image bytes.
    async fn remove(&self, id: &UserId) -> Result<(), Error>;

    /// Store image bytes for a user and record the attachment metadata.
    async fn attach_image(
        &self,
        id: &UserId,
        content_type: String,
        bytes: Vec<u8>,
    ) -> Result<User, Error>;

    /// Fetch the attached image of a user.
    ///
    /// NotFound when the user does not exist, has no attachment, or the
    /// backing bytes are missing from the blob store.
    async fn fetch_image(&self, id: &UserId) -> Result<ImageDownload, Error>;
}
