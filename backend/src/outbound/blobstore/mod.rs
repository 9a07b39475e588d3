//! Blob storage adapters for image attachments.

mod fs_image_store;

pub use fs_image_store::FsImageStore;
