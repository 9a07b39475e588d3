//! Domain types, ports, and services.
//!
//! Purpose: define the user entity, the transport-agnostic error type, the
//! ports at the hexagon's edge, and the service implementing the resource
//! operations. Inbound and outbound adapters depend on this module; it
//! depends on neither.

pub mod error;
pub mod ports;
pub mod user;
pub mod users_service;

pub use self::error::{Error, ErrorCode};
pub use self::user::{ImageAttachment, NewUser, User, UserId, UserUpdate};
pub use self::users_service::UsersService;
