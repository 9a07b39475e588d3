//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain's driving port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UserDirectory;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// The user resource operations.
    pub users: Arc<dyn UserDirectory>,
}

impl HttpState {
    /// Construct state around a user directory implementation.
    pub fn new(users: Arc<dyn UserDirectory>) -> Self {
        Self { users }
    }
}
