//! Server configuration from environment variables.
//!
//! DESIGN
//! ======
//! Leptos owns the site layout (`[package.metadata.leptos]`, `LEPTOS_*`
//! overrides). This module only adds what the binary itself needs: where the
//! static `public/` assets live and an optional `PORT` override for hosts
//! that assign one.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}: expected an integer between 1 and 65535")]
    InvalidPort(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Directory served for any path no route claims.
    pub public_dir: PathBuf,
    /// Replaces the port of the Leptos `site-addr` when set.
    pub port: Option<u16>,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPort` when `PORT` is set but not a valid
    /// non-zero port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let public_dir = non_blank(lookup("PUBLIC_DIR"))
            .map_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR), PathBuf::from);
        let port = non_blank(lookup("PORT")).map(|raw| parse_port(&raw)).transpose()?;
        Ok(Self { public_dir, port })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(raw.to_owned())),
    }
}
