//! User directory backend library modules.
//!
//! The crate follows a hexagonal layout: domain types and ports live in
//! [`domain`], HTTP handlers in [`inbound`], infrastructure adapters in
//! [`outbound`], and application wiring in [`server`].

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;

#[cfg(test)]
mod tests;
