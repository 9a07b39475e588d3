//! User data model.
//!
//! The record carries no field-level constraints: names, emails, and ages
//! are stored exactly as submitted. Existence of a record for a given
//! identifier is the only invariant enforced anywhere, and only at the
//! request boundary.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Stable user identifier, assigned by the repository on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

/// Metadata for a user's binary image attachment.
///
/// The bytes themselves live in the blob store under `blob_key`; only the
/// reference and its content type and length are recorded on the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageAttachment {
    /// Blob store key holding the image bytes.
    pub blob_key: String,
    /// Declared content type, served back verbatim.
    #[schema(example = "image/png")]
    pub content_type: String,
    /// Size of the stored bytes.
    pub length: u64,
}

/// A persisted user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, immutable once assigned.
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: UserId,
    /// Display name, unconstrained.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Email address, unconstrained.
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Age in years, unconstrained.
    #[schema(example = 36)]
    pub age: i32,
    /// Optional image attachment metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageAttachment>,
}

/// Creation payload: a user without an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Display name, unconstrained.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Email address, unconstrained.
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Age in years, unconstrained.
    #[schema(example = 36)]
    pub age: i32,
}

impl NewUser {
    /// Materialise the record under a repository-assigned identifier.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
            image: None,
        }
    }
}

/// Partial update payload.
///
/// The merge is shallow and submitted-keys-only: fields absent from the
/// request body are left unchanged on the loaded record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    /// Replacement display name, when submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement email address, when submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Replacement age, when submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

impl UserUpdate {
    /// Overwrite the submitted fields on `user`, leaving the rest intact.
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(age) = self.age {
            user.age = age;
        }
    }
}
