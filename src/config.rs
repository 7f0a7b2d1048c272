use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite://football-tournament.db?mode=rwc";
const DEFAULT_HOST: Ipv4Addr = Ipv4Addr::UNSPECIFIED;
const DEFAULT_PORT: u16 = 5004;
const DEFAULT_FRONTEND_PORT: u16 = 3000;
const DEFAULT_BACKEND_URL: &str = "http://localhost:5004";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Environment variable is set but cannot be parsed.
    #[error("Invalid value for environment variable {name}: {value:?}")]
    InvalidEnvVar { name: &'static str, value: String },
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: Ipv4Addr,
    pub port: u16,
}

impl Config {
    /// Reads `DATABASE_URL`, `HOST` and `PORT`, falling back to defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: parse_var(&lookup, "HOST", DEFAULT_HOST)?,
            port: parse_var(&lookup, "PORT", DEFAULT_PORT)?,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

/// Frontend proxy configuration
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    pub backend_url: String,
    pub host: Ipv4Addr,
    pub port: u16,
}

impl FrontendConfig {
    /// Reads `BACKEND_URL`, `HOST` and `FRONTEND_PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            backend_url: lookup("BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            host: parse_var(&lookup, "HOST", DEFAULT_HOST)?,
            port: parse_var(&lookup, "FRONTEND_PORT", DEFAULT_FRONTEND_PORT)?,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar { name, value }),
        None => Ok(default),
    }
}
