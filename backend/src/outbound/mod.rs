//! Outbound adapters implementing domain ports for storage.
//!
//! Adapters are thin translators between domain types and storage-specific
//! representations; they contain no business logic.
//!
//! - **persistence**: process-local user record store.
//! - **blobstore**: filesystem-backed image byte store.

pub mod blobstore;
pub mod persistence;
