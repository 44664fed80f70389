//! Typed server configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! `AppConfig::from_env` reads the process environment (after `.env` has
//! been loaded by `main`). Parsing goes through `from_lookup` so tests can
//! feed a map instead of mutating global env state.

use std::time::Duration;

use crate::services::images::DEFAULT_IMAGE_HOSTS;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_TTL_SECS: u64 = 7 * 24 * 60 * 60;
pub const DEFAULT_FIREBASE_AUTH_URL: &str = "https://identitytoolkit.googleapis.com";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid BAAS_MODE: {0} (expected firebase or memory)")]
    InvalidMode(String),
    #[error("invalid SESSION_TTL_SECS: {0}")]
    InvalidTtl(String),
    #[error("{0} is required when BAAS_MODE=firebase")]
    Missing(&'static str),
}

/// Which backend adapter serves identity and documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaasMode {
    Firebase,
    /// In-process store; data is lost on restart.
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirebaseConfig {
    pub api_key: String,
    /// Realtime Database root, without a trailing slash.
    pub database_url: String,
    /// Identity Toolkit root, without a trailing slash.
    pub auth_url: String,
    /// Database secret or token appended as `?auth=`.
    pub database_auth: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub mode: BaasMode,
    /// Present iff `mode` is `Firebase`.
    pub firebase: Option<FirebaseConfig>,
    pub image_hosts: Vec<String>,
    /// Lowercased admin e-mail addresses.
    pub admin_emails: Vec<String>,
    pub session_ttl: Duration,
    pub cookie_secure: bool,
    /// Extra browser origin allowed to call the API with credentials.
    /// The bundled UI is same-origin and needs none.
    pub cors_origin: Option<String>,
}

impl AppConfig {
    /// Build config from environment variables.
    ///
    /// Optional (defaults in parentheses):
    /// - `PORT` (3000)
    /// - `BAAS_MODE`: `firebase` (default) or `memory`
    /// - `IMAGE_HOSTS`: comma-separated host allow-list (three hosted defaults)
    /// - `ADMIN_EMAILS`: comma-separated (none)
    /// - `SESSION_TTL_SECS` (7 days)
    /// - `COOKIE_SECURE` (false)
    /// - `CORS_ORIGIN`: one origin allowed cross-origin with cookies (none)
    ///
    /// Required for `firebase`: `FIREBASE_API_KEY`, `FIREBASE_DATABASE_URL`.
    /// Optional for `firebase`: `FIREBASE_AUTH_URL`, `FIREBASE_DATABASE_AUTH`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for unparsable values or missing Firebase keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let mode = parse_mode(get("BAAS_MODE").as_deref())?;
        let firebase = match mode {
            BaasMode::Memory => None,
            BaasMode::Firebase => Some(FirebaseConfig {
                api_key: get("FIREBASE_API_KEY").ok_or(ConfigError::Missing("FIREBASE_API_KEY"))?,
                database_url: get("FIREBASE_DATABASE_URL")
                    .ok_or(ConfigError::Missing("FIREBASE_DATABASE_URL"))?
                    .trim_end_matches('/')
                    .to_owned(),
                auth_url: get("FIREBASE_AUTH_URL")
                    .unwrap_or_else(|| DEFAULT_FIREBASE_AUTH_URL.to_owned())
                    .trim_end_matches('/')
                    .to_owned(),
                database_auth: get("FIREBASE_DATABASE_AUTH"),
            }),
        };
        let image_hosts = get("IMAGE_HOSTS").map_or_else(
            || DEFAULT_IMAGE_HOSTS.iter().map(|h| (*h).to_owned()).collect(),
            |raw| split_csv(&raw),
        );
        let admin_emails = get("ADMIN_EMAILS")
            .map(|raw| split_csv(&raw).into_iter().map(|e| e.to_ascii_lowercase()).collect())
            .unwrap_or_default();
        let session_ttl = match get("SESSION_TTL_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTtl(raw)),
            },
            None => Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
        };
        let cookie_secure = get("COOKIE_SECURE").and_then(|raw| parse_bool(&raw)).unwrap_or(false);
        let cors_origin = get("CORS_ORIGIN").map(|raw| raw.trim_end_matches('/').to_owned());

        Ok(Self { port, mode, firebase, image_hosts, admin_emails, session_ttl, cookie_secure, cors_origin })
    }
}

fn parse_mode(raw: Option<&str>) -> Result<BaasMode, ConfigError> {
    match raw.map(str::to_ascii_lowercase).as_deref() {
        None | Some("firebase") => Ok(BaasMode::Firebase),
        Some("memory") => Ok(BaasMode::Memory),
        Some(other) => Err(ConfigError::InvalidMode(other.to_owned())),
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
