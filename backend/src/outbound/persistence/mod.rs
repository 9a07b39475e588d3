//! User record persistence adapters.
//!
//! The durable persistence engine is an external collaborator behind the
//! [`crate::domain::ports::UserRepository`] port; the adapter shipped here
//! keeps records in process memory. A database-backed adapter would slot in
//! as another implementation of the same port.

mod memory_user_repository;

pub use memory_user_repository::InMemoryUserRepository;
