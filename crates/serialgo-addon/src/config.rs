//! Runtime configuration read from the environment
//!
//! - `PORT` - listening port (default 3000)
//! - `SERIALGO_BASE_URL` - site the scraper talks to
//! - `SERIALGO_TIMEOUT_SECS` - outbound request timeout (default 30)

use std::net::{Ipv4Addr, SocketAddr};

use serialgo_core::{ClientConfig, SERIALGO_BASE_URL};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Startup configuration error
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Server and scraper settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddonConfig {
    pub port: u16,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for AddonConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            base_url: SERIALGO_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AddonConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unset or blank variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get("PORT") {
            config.port = parse_var("PORT", &value)?;
        }
        if let Some(value) = get("SERIALGO_BASE_URL") {
            config.base_url = value.trim().to_string();
        }
        if let Some(value) = get("SERIALGO_TIMEOUT_SECS") {
            config.timeout_secs = parse_var("SERIALGO_TIMEOUT_SECS", &value)?;
        }

        Ok(config)
    }

    /// Address the server binds to (all interfaces).
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// Settings for the outbound HTTP client
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}
