//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use client::config::{ClientConfig, DEFAULT_BACKEND_URL};

/// What happened when looking for a `.env` file.
#[derive(Debug, PartialEq, Eq)]
pub enum DotenvStatus {
    Loaded(PathBuf),
    /// No file; the process environment is used as-is.
    Missing,
    /// A file exists but could not be read or parsed.
    Unreadable(String),
}

impl DotenvStatus {
    pub fn from_result(result: Result<PathBuf, dotenvy::Error>) -> Self {
        match result {
            Ok(path) => Self::Loaded(path),
            Err(e) if e.not_found() => Self::Missing,
            Err(e) => Self::Unreadable(e.to_string()),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid BACKEND_URL {value:?}: expected an http:// or https:// URL")]
    InvalidBackendUrl { value: String },

    #[error("invalid PORT {value:?}: expected an integer between 1 and 65535")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Backend location handed to every rendered page.
    pub client: ClientConfig,
    /// Overrides the port of the Leptos site address when set.
    pub port: Option<u16>,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `BACKEND_URL`: OAuth backend base URL (default `http://localhost:8000`)
    /// - `PORT`: listen port override
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client = parse_backend_url(lookup("BACKEND_URL").as_deref())?;
        let port = lookup("PORT").map(|raw| parse_port(&raw)).transpose()?;
        Ok(Self { client, port })
    }
}

fn parse_backend_url(raw: Option<&str>) -> Result<ClientConfig, ConfigError> {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_BACKEND_URL);
    let lower = value.to_ascii_lowercase();
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| lower.strip_prefix(scheme).is_some_and(|rest| !rest.trim_matches('/').is_empty()));
    if !has_host {
        return Err(ConfigError::InvalidBackendUrl { value: value.to_owned() });
    }
    Ok(ClientConfig::new(value))
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort { value: raw.to_owned() }),
    }
}
