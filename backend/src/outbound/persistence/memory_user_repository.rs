//! In-process implementation of the user repository port.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::trace;
use uuid::Uuid;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{NewUser, User, UserId};

/// Process-local `UserRepository` backed by a `HashMap`.
///
/// Identifier assignment happens here, on insert, mirroring a
/// database-generated key. Iteration order of the map is what `list`
/// returns, so no ordering is guaranteed.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    records: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, draft: NewUser) -> Result<User, UserRepositoryError> {
        let user = draft.into_user(UserId::random());
        let mut records = self.records.write().await;
        records.insert(*user.id.as_uuid(), user.clone());
        trace!(user_id = %user.id, "record inserted");
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let records = self.records.read().await;
        Ok(records.get(id.as_uuid()).cloned())
    }

    async fn save(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut records = self.records.write().await;
        records.insert(*user.id.as_uuid(), user.clone());
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserRepositoryError> {
        let mut records = self.records.write().await;
        records.remove(id.as_uuid());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }
}
