//! Server configuration parsed from environment variables.

use axum::http::HeaderValue;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://frontend:3000";

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a TCP port number.
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),

    /// `FRONTEND_ORIGIN` is set but is not a valid header value.
    #[error("invalid FRONTEND_ORIGIN value: {0}")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Port the server listens on (bound on all interfaces).
    pub port: u16,
    /// Origin allowed to call this server cross-site, pre-validated for
    /// direct use in the CORS allowlist.
    pub frontend_origin: HeaderValue,
}

impl Config {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 5000
    /// - `FRONTEND_ORIGIN`: CORS allowlist origin, default
    ///   `http://frontend:3000`
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            frontend_origin: parse_origin(std::env::var("FRONTEND_ORIGIN").ok().as_deref())?,
        })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidPort(v.to_owned())),
    }
}

fn parse_origin(raw: Option<&str>) -> Result<HeaderValue, ConfigError> {
    // Browsers never send a trailing slash in the Origin header, so one in
    // the configured value would silently break the allowlist.
    let origin = raw.unwrap_or(DEFAULT_FRONTEND_ORIGIN).trim_end_matches('/');
    HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.to_owned()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
