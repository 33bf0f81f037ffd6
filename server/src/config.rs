//! Server configuration from the process environment.
//!
//! ERROR HANDLING
//! ==============
//! Missing optional values fall back to defaults. A value that is present but
//! malformed is a `ConfigError`, never silently replaced.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Errors produced while assembling server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT: {value:?}")]
    InvalidPort { value: String },

    /// `PUBLIC_DIR` is set but empty.
    #[error("PUBLIC_DIR is set but empty")]
    EmptyPublicDir,

    /// The cargo-leptos configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory served for public files; the Leptos site root when `None`.
    pub public_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Read configuration from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PUBLIC_DIR`: static file directory override
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = std::env::var("PORT").ok();
        let public_dir = std::env::var("PUBLIC_DIR").ok();
        Self::from_values(port.as_deref(), public_dir.as_deref())
    }

    /// Build configuration from raw variable values.
    pub fn from_values(port: Option<&str>, public_dir: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self { port: parse_port(port)?, public_dir: parse_public_dir(public_dir)? })
    }

    /// Listen address on all interfaces.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

pub fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort { value: value.to_owned() }),
    }
}

fn parse_public_dir(raw: Option<&str>) -> Result<Option<PathBuf>, ConfigError> {
    match raw {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Err(ConfigError::EmptyPublicDir),
        Some(value) => Ok(Some(PathBuf::from(value.trim()))),
    }
}
