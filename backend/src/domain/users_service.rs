//! User directory domain service.
//!
//! Implements the [`UserDirectory`] driving port on top of the driven ports
//! for record and blob storage. All not-found policy lives here, in
//! [`UsersService::find_or_not_found`], so every identifier-taking operation
//! behaves uniformly.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::ports::{
    ImageDownload, ImageStore, ImageStoreError, UserDirectory, UserRepository, UserRepositoryError,
};
use crate::domain::{Error, ImageAttachment, NewUser, User, UserId, UserUpdate};

/// Service implementing the user resource operations.
#[derive(Clone)]
pub struct UsersService<R, S> {
    repo: Arc<R>,
    images: Arc<S>,
}

impl<R, S> UsersService<R, S> {
    /// Create a new service over the given storage adapters.
    pub fn new(repo: Arc<R>, images: Arc<S>) -> Self {
        Self { repo, images }
    }
}

fn map_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn map_image_store_error(error: ImageStoreError) -> Error {
    match error {
        ImageStoreError::Io { message } => Error::internal(format!("image store error: {message}")),
    }
}

impl<R, S> UsersService<R, S>
where
    R: UserRepository,
    S: ImageStore,
{
    /// Look up a user, mapping an absent record to a NotFound error.
    ///
    /// Callers propagate the error with `?`, so no operation continues past
    /// a missing record.
    async fn find_or_not_found(&self, id: &UserId) -> Result<User, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("no user with id {id}")))
    }
}

#[async_trait]
impl<R, S> UserDirectory for UsersService<R, S>
where
    R: UserRepository,
    S: ImageStore,
{
    async fn list(&self) -> Result<Vec<User>, Error> {
        self.repo.list().await.map_err(map_repository_error)
    }

    async fn create(&self, draft: NewUser) -> Result<User, Error> {
        let user = self
            .repo
            .insert(draft)
            .await
            .map_err(map_repository_error)?;
        debug!(user_id = %user.id, "user created");
        Ok(user)
    }

    async fn get(&self, id: &UserId) -> Result<User, Error> {
        self.find_or_not_found(id).await
    }

    async fn update(&self, id: &UserId, changes: UserUpdate) -> Result<User, Error> {
        let mut user = self.find_or_not_found(id).await?;
        changes.apply(&mut user);
        self.repo.save(&user).await.map_err(map_repository_error)?;
        debug!(user_id = %user.id, "user updated");
        Ok(user)
    }

    async fn remove(&self, id: &UserId) -> Result<(), Error> {
        let user = self.find_or_not_found(id).await?;
        self.repo.delete(id).await.map_err(map_repository_error)?;
        debug!(user_id = %id, "user deleted");

        // The record is the source of truth; an orphaned blob is merely
        // unreachable, so blob cleanup failures do not fail the delete.
        if let Some(attachment) = user.image {
            if let Err(error) = self.images.remove(&attachment.blob_key).await {
                warn!(user_id = %id, %error, "failed to remove image blob for deleted user");
            }
        }
        Ok(())
    }

    async fn attach_image(
        &self,
        id: &UserId,
        content_type: String,
        bytes: Vec<u8>,
    ) -> Result<User, Error> {
        let mut user = self.find_or_not_found(id).await?;

        // Re-attaching replaces the previous bytes under the same key.
        let blob_key = user
            .image
            .as_ref()
            .map_or_else(|| Uuid::new_v4().to_string(), |a| a.blob_key.clone());

        self.images
            .put(&blob_key, &bytes)
            .await
            .map_err(map_image_store_error)?;

        user.image = Some(ImageAttachment {
            blob_key,
            content_type,
            length: bytes.len() as u64,
        });
        self.repo.save(&user).await.map_err(map_repository_error)?;
        debug!(user_id = %id, length = bytes.len(), "image attached");
        Ok(user)
    }

    async fn fetch_image(&self, id: &UserId) -> Result<ImageDownload, Error> {
        let user = self.find_or_not_found(id).await?;
        let attachment = user
            .image
            .ok_or_else(|| Error::not_found(format!("user {id} has no image")))?;

        let bytes = self
            .images
            .get(&attachment.blob_key)
            .await
            .map_err(map_image_store_error)?
            .ok_or_else(|| Error::not_found(format!("image bytes for user {id} are missing")))?;

        // The response length must describe the bytes actually served; the
        // recorded metadata can only diverge if the blob changed behind the
        // store's back.
        let length = bytes.len() as u64;
        if length != attachment.length {
            warn!(
                user_id = %id,
                recorded = attachment.length,
                actual = length,
                "stored blob length diverges from recorded attachment metadata"
            );
        }

        Ok(ImageDownload {
            content_type: attachment.content_type,
            length,
            bytes,
        })
    }
}

#[cfg(test)]
#[path = "users_service_tests.rs"]
mod tests;
