//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{NewUser, User, UserId};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserRepositoryError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection {
        /// Adapter-supplied description of the failure.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query {
        /// Adapter-supplied description of the failure.
        message: String,
    },
}

impl UserRepositoryError {
    /// Helper for connection related adapter errors.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query and mutation failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for user record storage and retrieval.
///
/// Absence of a record is an expected state: `find_by_id` returns `Ok(None)`
/// rather than an error, and the caller decides whether that is a failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new record, assigning its identifier.
    async fn insert(&self, draft: NewUser) -> Result<User, UserRepositoryError>;

    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Overwrite an existing record in place.
    async fn save(&self, user: &User) -> Result<(), UserRepositoryError>;

    /// Remove a record by identifier.
    async fn delete(&self, id: &UserId) -> Result<(), UserRepositoryError>;

    /// Fetch all records, in no guaranteed order.
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError>;
}
