//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports ([`UserRepository`], [`ImageStore`]) describe how the domain
//! expects to talk to storage adapters; the driving port ([`UserDirectory`])
//! is what inbound adapters call. Each driven port exposes strongly typed
//! errors so adapters map their failures into predictable variants.

mod image_store;
mod user_directory;
mod user_repository;

#[cfg(test)]
pub use image_store::MockImageStore;
pub use image_store::{ImageStore, ImageStoreError};
pub use user_directory::{ImageDownload, UserDirectory};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
