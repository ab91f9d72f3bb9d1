//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid BIND_ADDR: {0}")]
    InvalidBindAddr(String),
    #[error("invalid LOG_FORMAT '{0}' (expected 'text' or 'json')")]
    InvalidLogFormat(String),
    #[error("invalid API_UPSTREAM '{0}' (expected an http:// or https:// origin)")]
    InvalidApiUpstream(String),
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Overrides the Leptos `site-root` (directory holding `pkg/`).
    pub site_root: Option<PathBuf>,
    pub log_format: LogFormat,
    /// Backend origin that same-origin `/api/*` requests are forwarded to.
    pub api_upstream: Option<String>,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `SITE_ROOT`: Leptos site root override
    /// - `LOG_FORMAT`: `text` (default) or `json`
    /// - `API_UPSTREAM`: backend origin for `/api/*`; unset answers 503
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first variable that fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first variable that fails to parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: parse_bind_addr(lookup("BIND_ADDR").as_deref())?,
            port: parse_port(lookup("PORT").as_deref())?,
            site_root: non_empty(lookup("SITE_ROOT")).map(PathBuf::from),
            log_format: parse_log_format(lookup("LOG_FORMAT").as_deref())?,
            api_upstream: non_empty(lookup("API_UPSTREAM")).map(|v| parse_api_upstream(&v)).transpose()?,
        })
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|v| !v.trim().is_empty())
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(v) => v.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(v.to_owned())),
    }
}

fn parse_bind_addr(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    match raw {
        None => Ok(DEFAULT_BIND_ADDR),
        Some(v) => v.trim().parse::<IpAddr>().map_err(|_| ConfigError::InvalidBindAddr(v.to_owned())),
    }
}

fn parse_log_format(raw: Option<&str>) -> Result<LogFormat, ConfigError> {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("text") => Ok(LogFormat::Text),
        Some("json") => Ok(LogFormat::Json),
        Some(other) => Err(ConfigError::InvalidLogFormat(other.to_owned())),
    }
}

fn parse_api_upstream(raw: &str) -> Result<String, ConfigError> {
    let origin = raw.trim().trim_end_matches('/');
    let rest = origin.strip_prefix("https://").or_else(|| origin.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() => Ok(origin.to_owned()),
        _ => Err(ConfigError::InvalidApiUpstream(raw.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
