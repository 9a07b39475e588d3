//! HTTP server configuration object and helpers.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default bind address when `BIND_ADDR` is unset.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
/// Default image blob directory when `IMAGE_STORE_DIR` is unset.
const DEFAULT_IMAGE_STORE_DIR: &str = "data/images";

/// Configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    bind_addr: SocketAddr,
    image_root: PathBuf,
}

impl ServerConfig {
    /// Construct a server configuration from explicit values.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, image_root: impl Into<PathBuf>) -> Self {
        Self {
            bind_addr,
            image_root: image_root.into(),
        }
    }

    /// Build the configuration from `BIND_ADDR` and `IMAGE_STORE_DIR`.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when `BIND_ADDR` does not parse as a
    /// socket address.
    pub fn from_env() -> std::io::Result<Self> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
        let bind_addr = parse_bind_addr(&bind_addr)?;
        let image_root =
            env::var("IMAGE_STORE_DIR").unwrap_or_else(|_| DEFAULT_IMAGE_STORE_DIR.into());
        Ok(Self::new(bind_addr, image_root))
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the directory image blobs are stored under.
    #[must_use]
    pub fn image_root(&self) -> &PathBuf {
        &self.image_root
    }
}

/// Parse a `BIND_ADDR` value, surfacing the offending input on failure.
fn parse_bind_addr(raw: &str) -> std::io::Result<SocketAddr> {
    raw.parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR {raw:?}: {e}")))
}
